use crate::utils;
use shared::Share;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ShareDetailProps {
    /// Share to show; nothing is rendered when `None`
    pub share: Option<Share>,
    pub on_close: Callback<()>,
}

#[function_component(ShareDetail)]
pub fn share_detail(props: &ShareDetailProps) -> Html {
    let Some(share) = props.share.as_ref() else {
        return html! {};
    };

    let on_close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let on_backdrop = on_close.clone();
    let stop = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <div class="modal-overlay" onclick={on_backdrop}>
            <div class="modal-content share-detail" onclick={stop}>
                <button class="modal-close" onclick={on_close}>{ "×" }</button>
                <img class="share-logo" src={share.logo_url.clone()} alt={share.long_name.clone()} />
                <h2 id="modal-title">{ &share.long_name }</h2>
                <p id="modal-description">{ format!("Símbolo: {}", share.symbol) }</p>
                <p id="modal-price">{ format!("Preço: {}", utils::format_price(share.regular_market_price)) }</p>
            </div>
        </div>
    }
}
