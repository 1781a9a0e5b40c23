//! Main application entry point for the storefront.
//! Mounts every page behind the router; the product reviews page is the only one with content.
use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use crate::components::reviews_list::ReviewPage;

/// Pages linked from the home page, in navigation order.
pub const PAGES: &[(&str, &str)] = &[
    ("/about", "About"),
    ("/cart", "Shopping Cart"),
    ("/shipper-details", "Shipper Details"),
    ("/seller-report", "Seller Product Report"),
    ("/promotion", "Promotion"),
    ("/user", "User Details"),
    ("/review", "Product Reviews"),
];

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/storefront.css" />
        <Title text="Storefront" />

        <Router>
            <main>
                <Routes>
                    <Route path="/" view=HomePage />
                    <Route path="/about" view=|| view! { <h1>{ "About Page" }</h1> } />
                    <Route path="/cart" view=|| view! { <PagePlaceholder title="Shopping Cart" /> } />
                    <Route path="/shipper-details" view=|| view! { <PagePlaceholder title="Shipper Details" /> } />
                    <Route path="/seller-report" view=|| view! { <PagePlaceholder title="Seller Product Report" /> } />
                    <Route path="/promotion" view=|| view! { <PagePlaceholder title="Promotion" /> } />
                    <Route path="/user" view=|| view! { <PagePlaceholder title="User Details" /> } />
                    <Route path="/review" view=ReviewPage />
                    <Route path="/*any" view=NotFound />
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn HomePage() -> impl IntoView {
    view! {
        <div class="home">
            <h1>{ "Storefront" }</h1>
            <nav>
                <ul>
                    {
                        PAGES.iter().map(|(path, title)| view! {
                            <li><A href=*path>{ *title }</A></li>
                        }).collect::<Vec<_>>()
                    }
                </ul>
            </nav>
        </div>
    }
}

/// Page that is routed but has no content yet.
#[component]
fn PagePlaceholder(title: &'static str) -> impl IntoView {
    view! {
        <div class="page-placeholder">
            <h1>{ title }</h1>
        </div>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    #[cfg(feature = "ssr")]
    {
        if let Some(response) = use_context::<leptos_actix::ResponseOptions>() {
            response.set_status(actix_web::http::StatusCode::NOT_FOUND);
        }
    }

    view! {
        <div class="not-found">
            <h1>{ "404" }</h1>
            <p>{ "Page not found" }</p>
            <A href="/">{ "Back to Home" }</A>
        </div>
    }
}
