//! Announcement Commands

use super::{expect_ok, form_body, post, ApiError, CONTENT_TYPE_FORM};

/// `POST /dismiss_announcement`; the response body is ignored
pub async fn dismiss_announcement(endpoint: &str, announcement_id: &str) -> Result<(), ApiError> {
    let body = form_body(&[("announcement_id", announcement_id)]);
    expect_ok(post(endpoint, CONTENT_TYPE_FORM, &body, false).await?).await?;
    Ok(())
}
