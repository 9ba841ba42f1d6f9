use yew::prelude::*;

/// The banner shown under a form after an attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionStatus {
    pub message: String,
    pub is_success: bool,
}

impl SubmissionStatus {
    pub fn success(message: impl Into<String>) -> Self {
        Self { message: message.into(), is_success: true }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self { message: message.into(), is_success: false }
    }
}

#[derive(Properties, PartialEq)]
pub struct StatusBannerProps {
    pub status: SubmissionStatus,
}

#[function_component(StatusBanner)]
pub fn status_banner(props: &StatusBannerProps) -> Html {
    let StatusBannerProps { status } = props;
    let (class, icon) = if status.is_success {
        ("form-status success", "✓")
    } else {
        ("form-status error", "!")
    };

    html! {
        <div class={class} role="status">
            <span class="form-status-icon">{icon}</span>
            <span>{&status.message}</span>
        </div>
    }
}
