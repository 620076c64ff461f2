use specimen_shared::dto::UserDto;

use crate::domain::User;

/// Keeps `id`, `email`, `privilege` and `is_active`; everything else on the
/// DTO (timestamps, `is_superuser`, ...) is dropped.
impl From<UserDto> for User {
    fn from(dto: UserDto) -> Self {
        Self {
            id: dto.id,
            email: dto.email,
            privilege: dto.privilege,
            is_active: dto.is_active,
        }
    }
}

pub fn user_from_dto(dto: UserDto) -> User {
    User::from(dto)
}
