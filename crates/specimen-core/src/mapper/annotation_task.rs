use specimen_shared::dto::AnnotationTaskDto;

use crate::domain::AnnotationTask;

impl From<AnnotationTaskDto> for AnnotationTask {
    fn from(dto: AnnotationTaskDto) -> Self {
        Self {
            id: dto.id,
            title: dto.title,
            description: dto.description,
            status: dto.status,
            assignee_id: dto.assignee_id,
            created_at: dto.created_at,
            updated_at: dto.updated_at,
        }
    }
}

pub fn annotation_task_from_dto(dto: AnnotationTaskDto) -> AnnotationTask {
    AnnotationTask::from(dto)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use specimen_shared::dto::AnnotationTaskStatus;
    use uuid::Uuid;

    #[test]
    fn test_annotation_task_keeps_every_field() {
        let now = Utc::now();
        let dto = AnnotationTaskDto {
            id: Uuid::new_v4(),
            title: "Label Aedes batch 4".to_string(),
            description: Some("Night trap, district 3".to_string()),
            status: AnnotationTaskStatus::InProgress,
            assignee_id: Some(Uuid::new_v4()),
            created_at: now,
            updated_at: now,
        };

        let task = annotation_task_from_dto(dto.clone());
        assert_eq!(
            serde_json::to_value(&task).unwrap(),
            serde_json::to_value(&dto).unwrap()
        );
    }
}
