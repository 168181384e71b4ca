use crate::shared::modal::Modal;
use leptos::prelude::*;
use thaw::*;

/// Подтверждение необратимого действия (удаление).
/// Запрос отправляется только после нажатия «Удалить».
#[component]
pub fn ConfirmDialog(
    #[prop(into)] title: String,
    #[prop(into)] message: String,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
    #[prop(into)] busy: Signal<bool>,
) -> impl IntoView {
    view! {
        <Modal title=title on_close=on_cancel>
            <p class="confirm-dialog__message">{message}</p>
            <Flex justify=FlexJustify::End gap=FlexGap::Small>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| on_cancel.run(())
                >
                    "Отмена"
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| on_confirm.run(())
                    disabled=busy
                >
                    {move || if busy.get() { "Удаление..." } else { "Удалить" }}
                </Button>
            </Flex>
        </Modal>
    }
}
