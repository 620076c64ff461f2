use specimen_shared::dto::SiteDto;

use crate::domain::Site;

impl From<SiteDto> for Site {
    fn from(dto: SiteDto) -> Self {
        Self {
            id: dto.id,
            program_id: dto.program_id,
            district: dto.district,
            subdistrict: dto.subdistrict,
            village_name: dto.village_name,
            house_number: dto.house_number,
            is_active: dto.is_active,
        }
    }
}

impl From<Site> for SiteDto {
    fn from(site: Site) -> Self {
        Self {
            id: site.id,
            program_id: site.program_id,
            district: site.district,
            subdistrict: site.subdistrict,
            village_name: site.village_name,
            house_number: site.house_number,
            is_active: site.is_active,
        }
    }
}

pub fn site_from_dto(dto: SiteDto) -> Site {
    Site::from(dto)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn sample() -> SiteDto {
        SiteDto {
            id: 41,
            program_id: 3,
            district: Some("Kandy".to_string()),
            subdistrict: None,
            village_name: Some("Ampitiya".to_string()),
            house_number: None,
            is_active: false,
        }
    }

    #[test]
    fn test_site_keeps_every_field() {
        let dto = sample();
        let site = site_from_dto(dto.clone());

        let dto_json: Value = serde_json::to_value(&dto).unwrap();
        let site_json: Value = serde_json::to_value(&site).unwrap();
        assert_eq!(dto_json, site_json);
    }

    #[test]
    fn test_site_mapping_is_reversible() {
        let dto = sample();
        assert_eq!(SiteDto::from(site_from_dto(dto.clone())), dto);
    }

    #[test]
    fn test_site_mapping_is_deterministic() {
        assert_eq!(site_from_dto(sample()), site_from_dto(sample()));
    }
}
