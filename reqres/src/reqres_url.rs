use url::Url;

#[derive(Debug, Clone)]
pub struct ReqResURL(String);

impl AsRef<str> for ReqResURL {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl ReqResURL {
    pub fn new(base: &Url) -> Self {
        Self(base.as_str().to_string())
    }

    /// Append the given path to the URL.
    pub fn append_path(&self, path: &str) -> Self {
        let trimmed_url = self.0.trim_end_matches('/');
        let trimmed_path = path.trim_start_matches('/');
        Self(format!("{}/{}", trimmed_url, trimmed_path))
    }

    /// URL of the single-user lookup endpoint, `{base}/users/{id}`.
    pub fn user(&self, user_id: i32) -> Self {
        self.append_path(&format!("users/{user_id}"))
    }
}
