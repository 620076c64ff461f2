use specimen_shared::dto::{AuthResponseDto, AuthTokensDto};

use crate::domain::{AuthPayload, AuthTokens, User};

impl From<AuthTokensDto> for AuthTokens {
    fn from(dto: AuthTokensDto) -> Self {
        Self {
            access_token: dto.access_token,
            refresh_token: dto.refresh_token,
        }
    }
}

/// The embedded user goes through the user projection.
impl From<AuthResponseDto> for AuthPayload {
    fn from(dto: AuthResponseDto) -> Self {
        Self {
            message: dto.message,
            user: User::from(dto.user),
            tokens: AuthTokens::from(dto.tokens),
        }
    }
}

pub fn auth_tokens_from_dto(dto: AuthTokensDto) -> AuthTokens {
    AuthTokens::from(dto)
}

pub fn auth_payload_from_dto(dto: AuthResponseDto) -> AuthPayload {
    AuthPayload::from(dto)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use specimen_shared::dto::{UserDto, UserPrivilege};
    use uuid::Uuid;

    fn sample() -> AuthResponseDto {
        let now = Utc::now();
        AuthResponseDto {
            message: "Login successful".to_string(),
            user: UserDto {
                id: Uuid::new_v4(),
                email: "annotator@example.org".to_string(),
                privilege: UserPrivilege::Annotator,
                is_active: true,
                is_superuser: false,
                created_at: now,
                updated_at: now,
                last_login_at: Some(now),
            },
            tokens: AuthTokensDto {
                access_token: "opaque-access".to_string(),
                refresh_token: "opaque-refresh".to_string(),
            },
        }
    }

    #[test]
    fn test_payload_carries_projected_user_and_tokens() {
        let dto = sample();
        let payload = auth_payload_from_dto(dto.clone());

        assert_eq!(payload.message, "Login successful");
        assert_eq!(payload.user, User::from(dto.user));
        assert_eq!(payload.tokens.access_token, "opaque-access");
        assert_eq!(payload.tokens.refresh_token, "opaque-refresh");
    }

    #[test]
    fn test_tokens_are_copied_verbatim() {
        let tokens = auth_tokens_from_dto(AuthTokensDto {
            access_token: "a.b.c".to_string(),
            refresh_token: " spaced ".to_string(),
        });
        assert_eq!(tokens.access_token, "a.b.c");
        assert_eq!(tokens.refresh_token, " spaced ");
    }

    #[test]
    fn test_token_debug_is_redacted() {
        let payload = auth_payload_from_dto(sample());
        let rendered = format!("{payload:?}");
        assert!(!rendered.contains("opaque-access"));
        assert!(rendered.contains("annotator@example.org"));
    }
}
