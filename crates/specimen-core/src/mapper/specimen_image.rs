use specimen_shared::dto::SpecimenImageDto;

use crate::domain::SpecimenImage;

impl From<SpecimenImageDto> for SpecimenImage {
    fn from(dto: SpecimenImageDto) -> Self {
        Self {
            id: dto.id,
            url: dto.url,
            species: dto.species,
            sex: dto.sex,
            abdomen_status: dto.abdomen_status,
            captured_at: dto.captured_at,
            submitted_at: dto.submitted_at,
        }
    }
}

pub fn specimen_image_from_dto(dto: SpecimenImageDto) -> SpecimenImage {
    SpecimenImage::from(dto)
}
