use chrono::{Datelike, Duration, NaiveDate, Utc};
use leptos::prelude::*;
use thaw::*;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Первый и последний день месяца
pub fn month_bounds(year: i32, month: u32) -> Option<(NaiveDate, NaiveDate)> {
    let start = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    Some((start, next - Duration::days(1)))
}

/// Месяц, предшествующий месяцу даты `from` (yyyy-mm-dd); для пустой или
/// некорректной даты - предыдущий месяц относительно `today`
pub fn previous_month_range(from: &str, today: NaiveDate) -> Option<(String, String)> {
    let anchor = NaiveDate::parse_from_str(from, DATE_FORMAT).unwrap_or(today);
    let (year, month) = if anchor.month() == 1 {
        (anchor.year() - 1, 12)
    } else {
        (anchor.year(), anchor.month() - 1)
    };
    month_bounds(year, month).map(format_range)
}

fn format_range((start, end): (NaiveDate, NaiveDate)) -> (String, String) {
    (
        start.format(DATE_FORMAT).to_string(),
        end.format(DATE_FORMAT).to_string(),
    )
}

/// DateRangePicker - два поля дат и кнопки быстрого выбора месяца.
/// Оба значения передаются одним вызовом, чтобы ушёл один запрос.
#[component]
pub fn DateRangePicker(
    /// Значение даты "от" в формате yyyy-mm-dd
    #[prop(into)]
    date_from: Signal<String>,

    /// Значение даты "до" в формате yyyy-mm-dd
    #[prop(into)]
    date_to: Signal<String>,

    /// Callback при изменении диапазона дат (from, to)
    on_change: Callback<(String, String)>,

    #[prop(optional)]
    label: Option<String>,
) -> impl IntoView {
    let on_current_month = move |_| {
        let today = Utc::now().date_naive();
        if let Some(range) = month_bounds(today.year(), today.month()) {
            on_change.run(format_range(range));
        }
    };

    let on_previous_month = move |_| {
        let today = Utc::now().date_naive();
        if let Some(range) = previous_month_range(&date_from.get_untracked(), today) {
            on_change.run(range);
        }
    };

    view! {
        <Flex vertical=true gap=FlexGap::Small>
            {label.map(|l| view! { <Label>{l}</Label> })}

            <Flex class="date-range-picker" align=FlexAlign::Center gap=FlexGap::Small>
                <input
                    type="date"
                    class="date-range-picker__input"
                    prop:value=date_from
                    on:input=move |ev| {
                        on_change.run((event_target_value(&ev), date_to.get_untracked()));
                    }
                />
                <div>"—"</div>
                <input
                    type="date"
                    class="date-range-picker__input"
                    prop:value=date_to
                    on:input=move |ev| {
                        on_change.run((date_from.get_untracked(), event_target_value(&ev)));
                    }
                />
                <ButtonGroup>
                    <Button
                        size=ButtonSize::Small
                        appearance=ButtonAppearance::Subtle
                        on_click=on_previous_month
                    >
                        "-1M"
                    </Button>
                    <Button
                        size=ButtonSize::Small
                        appearance=ButtonAppearance::Subtle
                        on_click=on_current_month
                    >
                        "0M"
                    </Button>
                    <Button
                        size=ButtonSize::Small
                        appearance=ButtonAppearance::Subtle
                        on_click=move |_| on_change.run((String::new(), String::new()))
                    >
                        "✕"
                    </Button>
                </ButtonGroup>
            </Flex>
        </Flex>
    }
}
