use shared::Share;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ShareCardProps {
    pub share: Share,
    pub favorite: bool,
    pub on_open: Callback<Share>,
    pub on_toggle_favorite: Callback<Share>,
}

#[function_component(ShareCard)]
pub fn share_card(props: &ShareCardProps) -> Html {
    let share = &props.share;

    let on_open = {
        let on_open = props.on_open.clone();
        let share = share.clone();
        Callback::from(move |_: MouseEvent| on_open.emit(share.clone()))
    };

    let on_star = {
        let on_toggle = props.on_toggle_favorite.clone();
        let share = share.clone();
        Callback::from(move |e: MouseEvent| {
            // Don't open the detail modal as well
            e.stop_propagation();
            on_toggle.emit(share.clone());
        })
    };

    html! {
        <div class="share-card" onclick={on_open}>
            <img class="share-logo" src={share.logo_url.clone()} alt={share.long_name.clone()} />
            <div class="share-card-content">
                <h3 class="share-name">{ &share.long_name }</h3>
                <span class="share-symbol">{ &share.symbol }</span>
                <button
                    class={classes!("favorite-button", props.favorite.then_some("active"))}
                    title={if props.favorite { "Remover dos favoritos" } else { "Adicionar aos favoritos" }}
                    onclick={on_star}
                >
                    { if props.favorite { "★" } else { "☆" } }
                </button>
            </div>
        </div>
    }
}
