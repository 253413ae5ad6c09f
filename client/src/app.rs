//! Root application component with routing.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::footer::Footer;
use crate::components::nav_header::NavHeader;
use crate::pages::{
    admin_dashboard::AdminDashboardPage, admin_event_form::AdminEventFormPage, admin_login::AdminLoginPage,
    admin_resource_form::AdminResourceFormPage, admin_seed_events::AdminSeedEventsPage, contact::ContactPage,
    event_register::{self, EventRegisterPage}, events::EventsPage, history::HistoryPage, home::HomePage,
    not_found::NotFoundPage, references::ReferencesPage, resources::ResourcesPage,
};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component: header, routed page, footer.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/gatherly.css"/>
        <Title text="Gatherly"/>

        <Router>
            <NavHeader/>
            <main class="page">
                <Routes fallback=|| view! { <NotFoundPage/> }>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("resources") view=ResourcesPage/>
                    <Route path=StaticSegment("events") view=EventsPage/>
                    <Route path=event_register::register_route() view=EventRegisterPage/>
                    <Route path=event_register::register_root_route() view=EventRegisterPage/>
                    <Route path=StaticSegment("history") view=HistoryPage/>
                    <Route path=StaticSegment("references") view=ReferencesPage/>
                    <Route path=StaticSegment("contact") view=ContactPage/>
                    <Route path=(StaticSegment("admin"), StaticSegment("login")) view=AdminLoginPage/>
                    <Route path=StaticSegment("admin") view=AdminDashboardPage/>
                    <Route
                        path=(StaticSegment("admin"), StaticSegment("resources"), StaticSegment("new"))
                        view=AdminResourceFormPage
                    />
                    <Route
                        path=(StaticSegment("admin"), StaticSegment("events"), StaticSegment("new"))
                        view=AdminEventFormPage
                    />
                    <Route
                        path=(StaticSegment("admin"), StaticSegment("seed-events"))
                        view=AdminSeedEventsPage
                    />
                </Routes>
            </main>
            <Footer/>
        </Router>
    }
}
