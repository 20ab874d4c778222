use reqres::{ReqResError, ReqResUser};

use crate::domain::{
    models::{RemoteUser, UserId},
    AvatarError,
};

pub(super) fn to_remote_user(user: ReqResUser) -> RemoteUser {
    RemoteUser {
        id: UserId::new(user.id),
        email: user.email,
        avatar_url: user.avatar,
    }
}

pub(super) fn map_lookup_error(user_id: UserId, err: ReqResError) -> AvatarError {
    match err {
        ReqResError::UserNotFound(_) => AvatarError::UserNotFound(user_id),
        other => AvatarError::RemoteLookup(other.to_string()),
    }
}

pub(super) fn map_download_error(err: ReqResError) -> AvatarError {
    AvatarError::RemoteDownload(err.to_string())
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;

    use super::*;

    #[test]
    fn not_found_maps_to_user_not_found() {
        let err = map_lookup_error(UserId::new(23), ReqResError::UserNotFound(23));
        assert!(matches!(err, AvatarError::UserNotFound(id) if id == UserId::new(23)));
    }

    #[test]
    fn other_lookup_failures_are_remote_lookup_errors() {
        let err = map_lookup_error(
            UserId::new(1),
            ReqResError::Status(StatusCode::INTERNAL_SERVER_ERROR),
        );
        assert!(matches!(err, AvatarError::RemoteLookup(_)));
    }

    #[test]
    fn converts_avatar_url() {
        let user = to_remote_user(ReqResUser {
            id: 2,
            email: "janet.weaver@reqres.in".to_string(),
            first_name: "Janet".to_string(),
            last_name: "Weaver".to_string(),
            avatar: "https://reqres.in/img/faces/2-image.jpg".to_string(),
        });

        assert_eq!(user.id, UserId::new(2));
        assert_eq!(user.avatar_url, "https://reqres.in/img/faces/2-image.jpg");
    }
}
