//! Home page - paged card grid of shares

use crate::api::GlooApiClient;
use crate::components::{FilterDrawer, ShareCard, ShareDetail};
use crate::hooks::use_app_context;
use crate::session::BrowserTokenStore;
use crate::Route;
use shared::{
    ApiError, AppConfig, FetchOutcome, FetchTicket, Listing, ListingError, MarketApi, Session,
    Share, LOGGED_OUT_MESSAGE,
};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(HomePage)]
pub fn home_page() -> Html {
    let navigator = use_navigator().unwrap();
    let app = use_app_context();

    let on_login = {
        let navigator = navigator.clone();
        Callback::from(move |_: ()| navigator.push(&Route::Login))
    };

    let on_logout = {
        let app = app.clone();
        Callback::from(move |_: ()| {
            let mut session = app.session.clone();
            session.logout(&BrowserTokenStore, &app.config.token_key);
            app.set_session.emit(session);
            navigator.push(&Route::Login);
        })
    };

    html! {
        <ShareBoard
            config={app.config.clone()}
            session={app.session.clone()}
            {on_login}
            {on_logout}
        />
    }
}

#[derive(Properties, PartialEq)]
pub struct ShareBoardProps {
    pub config: AppConfig,
    /// Read once on mount
    pub session: Session,
    pub on_login: Callback<()>,
    pub on_logout: Callback<()>,
}

pub enum ShareBoardMsg {
    ApplyFilters,
    NextPage,
    PreviousPage,
    Loaded {
        seq: u64,
        result: Result<Vec<Share>, ApiError>,
    },
    ToggleFavorite(Share),
    OpenDetail(Share),
    CloseDetail,
    ToggleDrawer,
    SetFavoritesOnly(bool),
    SetPageSize(String),
}

pub struct ShareBoard {
    listing: Listing,
    filter_error: Option<String>,
    loading: bool,
}

impl ShareBoard {
    fn spawn_fetch(ctx: &Context<Self>, ticket: FetchTicket) {
        let props = ctx.props();
        let client = GlooApiClient::new(&props.config.api_base, props.session.token());
        let link = ctx.link().clone();
        spawn_local(async move {
            let result = client.fetch_shares(ticket.request).await;
            link.send_message(ShareBoardMsg::Loaded {
                seq: ticket.seq,
                result,
            });
        });
    }

    /// Spawn the fetch for a paging/filter operation, or record why none was issued
    fn issue(&mut self, ctx: &Context<Self>, ticket: Result<FetchTicket, ListingError>) -> bool {
        match ticket {
            Ok(ticket) => {
                self.filter_error = None;
                self.loading = true;
                Self::spawn_fetch(ctx, ticket);
            }
            Err(ListingError::Filter(e)) => self.filter_error = Some(e.to_string()),
            Err(e) => log::debug!("No fetch issued: {}", e),
        }
        true
    }

    fn view_header(&self, ctx: &Context<Self>) -> Html {
        let on_menu = ctx.link().callback(|_: MouseEvent| ShareBoardMsg::ToggleDrawer);
        let authenticated = self.listing.is_authenticated();
        let on_session = {
            let on_login = ctx.props().on_login.clone();
            let on_logout = ctx.props().on_logout.clone();
            Callback::from(move |_: MouseEvent| {
                if authenticated {
                    on_logout.emit(());
                } else {
                    on_login.emit(());
                }
            })
        };

        html! {
            <header class="board-header">
                <button class="icon-button menu-button" title="Filtros" onclick={on_menu}>
                    { "☰" }
                </button>
                <button
                    class="icon-button session-button"
                    title={if authenticated { "Sair" } else { "Entrar" }}
                    onclick={on_session}
                >
                    { if authenticated { "⎋" } else { "👤" } }
                </button>
            </header>
        }
    }

    fn view_grid(&self, ctx: &Context<Self>) -> Html {
        if !self.listing.is_authenticated() {
            return html! {
                <div class="logged-out">
                    <h2>{ LOGGED_OUT_MESSAGE }</h2>
                </div>
            };
        }

        let on_open = ctx.link().callback(ShareBoardMsg::OpenDetail);
        let on_toggle_favorite = ctx.link().callback(ShareBoardMsg::ToggleFavorite);
        let on_previous = ctx.link().callback(|_: MouseEvent| ShareBoardMsg::PreviousPage);
        let on_next = ctx.link().callback(|_: MouseEvent| ShareBoardMsg::NextPage);
        let page = self.listing.applied().page;

        html! {
            <>
                <div class="share-grid">
                    {
                        // Duplicates across pages are possible, so key by position
                        self.listing.shares().iter().enumerate().map(|(index, share)| {
                            html! {
                                <ShareCard
                                    key={index}
                                    share={share.clone()}
                                    favorite={self.listing.is_favorite(&share.symbol)}
                                    on_open={on_open.clone()}
                                    on_toggle_favorite={on_toggle_favorite.clone()}
                                />
                            }
                        }).collect::<Html>()
                    }
                </div>
                <nav class="pager">
                    <button onclick={on_previous} disabled={page <= 1 || self.loading}>{ "‹" }</button>
                    <span class="page-label">{ format!("Página {}", page) }</span>
                    <button onclick={on_next} disabled={self.loading}>{ "›" }</button>
                </nav>
            </>
        }
    }
}

impl Component for ShareBoard {
    type Message = ShareBoardMsg;
    type Properties = ShareBoardProps;

    fn create(ctx: &Context<Self>) -> Self {
        let props = ctx.props();
        let mut listing = Listing::new(&props.config, props.session.is_authenticated());
        let loading = match listing.initial_fetch() {
            Some(ticket) => {
                Self::spawn_fetch(ctx, ticket);
                true
            }
            None => false,
        };
        Self {
            listing,
            filter_error: None,
            loading,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            ShareBoardMsg::ApplyFilters => {
                let ticket = self.listing.apply_filters();
                self.issue(ctx, ticket)
            }
            ShareBoardMsg::NextPage => {
                let ticket = self.listing.next_page();
                self.issue(ctx, ticket)
            }
            ShareBoardMsg::PreviousPage => {
                let ticket = self.listing.previous_page();
                self.issue(ctx, ticket)
            }
            ShareBoardMsg::Loaded { seq, result } => {
                match self.listing.apply_response(seq, result) {
                    FetchOutcome::Stale => false,
                    FetchOutcome::Applied(_) | FetchOutcome::Failed => {
                        self.loading = false;
                        true
                    }
                }
            }
            ShareBoardMsg::ToggleFavorite(share) => {
                self.listing.toggle_favorite(&share);
                true
            }
            ShareBoardMsg::OpenDetail(share) => {
                self.listing.open_detail(share);
                true
            }
            ShareBoardMsg::CloseDetail => {
                self.listing.close_detail();
                true
            }
            ShareBoardMsg::ToggleDrawer => {
                self.listing.toggle_drawer();
                true
            }
            ShareBoardMsg::SetFavoritesOnly(on) => {
                self.listing.set_favorites_only(on);
                true
            }
            ShareBoardMsg::SetPageSize(raw) => {
                self.listing.set_page_size(raw);
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let draft = self.listing.draft();

        html! {
            <div class="board-container">
                { self.view_header(ctx) }

                <FilterDrawer
                    open={self.listing.drawer_open()}
                    favorites_only={draft.favorites_only}
                    page_size={draft.page_size.clone()}
                    error={self.filter_error.clone()}
                    on_close={link.callback(|_: ()| ShareBoardMsg::ToggleDrawer)}
                    on_favorites_only={link.callback(ShareBoardMsg::SetFavoritesOnly)}
                    on_page_size={link.callback(ShareBoardMsg::SetPageSize)}
                    on_apply={link.callback(|_: ()| ShareBoardMsg::ApplyFilters)}
                />

                { self.view_grid(ctx) }

                <ShareDetail
                    share={self.listing.detail().cloned()}
                    on_close={link.callback(|_: ()| ShareBoardMsg::CloseDetail)}
                />
            </div>
        }
    }
}
