use yew::prelude::*;

#[function_component(Header)]
pub fn header() -> Html {
    html! {
        <header class="app-header navbar bg-base-100 shadow-sm z-40 sticky top-0 h-[60px]">
            <div class="logo flex-1 px-4">
                <img src="/Assets/logo.png" alt="People's Leasing Logo" class="h-10" />
            </div>
            <div class="header-icons flex-none px-4">
                <div class="chatbot">
                    <img src="/Assets/AI_ChatBot.png" alt="AI Chatbot" class="h-10" />
                </div>
            </div>
        </header>
    }
}
