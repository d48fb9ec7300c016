//! Main application component

use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use crate::pages::*;
use crate::components::*;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_toaster();

    view! {
        <Stylesheet id="leptos" href="/pkg/beart-marketing.css"/>
        <Title text="Contact Us | Beart India"/>
        <Router>
            <div class="min-h-screen flex flex-col bg-white">
                <SiteNav/>
                <main class="flex-grow flex">
                    <Routes>
                        <Route path="/" view=ContactPage/>
                        <Route path="/contact" view=ContactPage/>
                    </Routes>
                </main>
                <Footer/>
            </div>
            <ToastViewport/>
        </Router>
    }
}
