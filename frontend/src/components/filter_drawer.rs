use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FilterDrawerProps {
    pub open: bool,
    pub favorites_only: bool,
    /// Items-per-page field, as typed
    pub page_size: String,
    pub error: Option<String>,
    pub on_close: Callback<()>,
    pub on_favorites_only: Callback<bool>,
    pub on_page_size: Callback<String>,
    pub on_apply: Callback<()>,
}

/// Drawer editing the draft filter. Only "Aplicar Filtros" triggers a fetch.
#[function_component(FilterDrawer)]
pub fn filter_drawer(props: &FilterDrawerProps) -> Html {
    if !props.open {
        return html! {};
    }

    let on_backdrop = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let stop = Callback::from(|e: MouseEvent| e.stop_propagation());

    let on_favorites = {
        let cb = props.on_favorites_only.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            cb.emit(input.checked());
        })
    };

    let on_page_size = {
        let cb = props.on_page_size.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            cb.emit(input.value());
        })
    };

    let on_apply = {
        let cb = props.on_apply.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };

    html! {
        <div class="drawer-overlay" onclick={on_backdrop}>
            <aside class="filter-drawer" onclick={stop}>
                <h2>{ "Filtros" }</h2>
                <label class="filter-row">
                    <input
                        type="checkbox"
                        checked={props.favorites_only}
                        onchange={on_favorites}
                    />
                    { " Mostrar apenas favoritos" }
                </label>
                <label class="filter-row">
                    { "Itens por página" }
                    <input
                        type="number"
                        min="1"
                        value={props.page_size.clone()}
                        oninput={on_page_size}
                    />
                </label>
                if let Some(error) = &props.error {
                    <p class="filter-error">{ error }</p>
                }
                <button class="apply-button" onclick={on_apply}>{ "Aplicar Filtros" }</button>
            </aside>
        </div>
    }
}
