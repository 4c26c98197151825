use poem_openapi::Object;

use business::domain::user::model::User;

#[derive(Debug, Clone, Object)]
pub struct SaveUserRequest {
    pub username: String,
    pub email: String,
    #[oai(skip_serializing_if_is_none)]
    pub profile_image_url: Option<String>,
}

#[derive(Debug, Clone, Object)]
pub struct UpdateUserRequest {
    #[oai(skip_serializing_if_is_none)]
    pub username: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub email: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub profile_image_url: Option<String>,
}

#[derive(Debug, Clone, Object)]
pub struct UserResponse {
    pub key: String,
    pub username: String,
    pub email: String,
    pub profile_image_url: String,
    pub friend_keys: Vec<String>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        let mut friend_keys: Vec<String> = user.friend_keys.into_keys().collect();
        friend_keys.sort();

        Self {
            key: user.key,
            username: user.username,
            email: user.email,
            profile_image_url: user.profile_image_url,
            friend_keys,
        }
    }
}
