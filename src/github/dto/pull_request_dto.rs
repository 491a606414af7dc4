#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequestDto {
    pub title: String,
    pub body: String,
    pub head: String,
    pub base: String,
    pub draft: bool,
}

impl PullRequestDto {
    pub fn new(
        title: impl Into<String>,
        body: impl Into<String>,
        head: impl Into<String>,
        base: impl Into<String>,
        draft: bool,
    ) -> Self {
        PullRequestDto {
            title: title.into(),
            body: body.into(),
            head: head.into(),
            base: base.into(),
            draft,
        }
    }
}
