//! Alert system for displaying error messages to users.
//!
//! Alerts are rendered as HTML fragments that htmx swaps into the
//! `#alert-container` element of the base page.

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use maud::{Markup, html};

/// An alert message, styled by its variant.
#[derive(Debug, Clone, PartialEq)]
pub enum Alert {
    /// An error message with details on how to fix it.
    Error { message: String, details: String },
}

impl Alert {
    /// Render the alert as HTML.
    pub fn into_html(self) -> Markup {
        let (message, details, container_style, text_style) = match self {
            Alert::Error { message, details } => (
                message,
                details,
                "border-red-300 bg-red-50 dark:bg-gray-800 dark:border-red-800",
                "text-red-800 dark:text-red-400",
            ),
        };

        html! {
            div
                role="alert"
                class={ "p-4 mb-4 border rounded-lg shadow " (container_style) }
            {
                div class="flex items-center justify-between"
                {
                    p class={ "font-semibold " (text_style) } { (message) }

                    button
                        type="button"
                        aria-label="Close"
                        class={ "ms-auto bg-transparent " (text_style) }
                        onclick="this.closest('[role=alert]').remove()"
                    {
                        "✕"
                    }
                }

                @if !details.is_empty() {
                    div class={ "mt-2 text-sm " (text_style) } { (details) }
                }
            }
        }
    }

    /// Render the alert as a response with `status_code`.
    pub fn into_response_with_status(self, status_code: StatusCode) -> Response {
        (status_code, Html(self.into_html().into_string())).into_response()
    }
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use scraper::Selector;

    use crate::{
        alert::Alert,
        test_utils::{assert_content_type, assert_valid_html, parse_html_fragment},
    };

    #[tokio::test]
    async fn renders_error_alert_with_status() {
        let response = Alert::Error {
            message: "Could not save".to_owned(),
            details: "Try again".to_owned(),
        }
        .into_response_with_status(StatusCode::INTERNAL_SERVER_ERROR);

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_content_type(&response, "text/html; charset=utf-8");
        let html = parse_html_fragment(response).await;
        assert_valid_html(&html);
        let message = html
            .select(&Selector::parse("p").unwrap())
            .next()
            .expect("No message found")
            .text()
            .collect::<String>();
        assert_eq!(message.trim(), "Could not save");
    }
}
