use contracts::enums::{InstallationStatus, ScheduleStatus, StoreStatus};
use leptos::prelude::*;

/// Badge component with different variants
#[component]
pub fn Badge(
    /// Badge variant: "primary", "success", "warning", "error", "neutral" (default)
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    /// Badge content
    children: Children,
) -> impl IntoView {
    let variant_class = move || badge_class(variant.get().as_deref().unwrap_or("neutral"));

    view! {
        <span class=move || format!("badge {}", variant_class())>
            {children()}
        </span>
    }
}

pub fn badge_class(variant: &str) -> &'static str {
    match variant {
        "primary" => "badge--primary",
        "success" => "badge--success",
        "warning" => "badge--warning",
        "error" => "badge--error",
        _ => "badge--neutral",
    }
}

/// Вариант бейджа для статуса записи
pub trait StatusVariant {
    fn variant(&self) -> &'static str;
    fn label(&self) -> &'static str;
}

impl StatusVariant for StoreStatus {
    fn variant(&self) -> &'static str {
        match self {
            StoreStatus::Active => "success",
            StoreStatus::Inactive => "neutral",
        }
    }

    fn label(&self) -> &'static str {
        self.display_name()
    }
}

impl StatusVariant for InstallationStatus {
    fn variant(&self) -> &'static str {
        match self {
            InstallationStatus::Installed => "success",
            InstallationStatus::ServiceDue => "warning",
            InstallationStatus::Replaced => "primary",
            InstallationStatus::Removed => "neutral",
        }
    }

    fn label(&self) -> &'static str {
        self.display_name()
    }
}

impl StatusVariant for ScheduleStatus {
    fn variant(&self) -> &'static str {
        match self {
            ScheduleStatus::Planned => "primary",
            ScheduleStatus::Done => "success",
            ScheduleStatus::Cancelled => "error",
        }
    }

    fn label(&self) -> &'static str {
        self.display_name()
    }
}

/// Бейдж статуса записи
#[component]
pub fn StatusBadge<S: StatusVariant + 'static>(status: S) -> impl IntoView {
    view! {
        <span class=format!("badge {}", badge_class(status.variant()))>
            {status.label()}
        </span>
    }
}
