use finchat_common::suggestions::{CATEGORIES, SuggestionCategory};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    /// Fired with the canned question text
    pub on_ask: Callback<String>,
}

#[function_component(Home)]
pub fn home(props: &Props) -> Html {
    html! {
        <div class="home flex flex-col items-center gap-2 p-6 text-center">
            <h1 class="text-3xl font-bold">{"Welcome to People's Leasing AI Investor Assistant"}</h1>
            <h3 class="text-lg text-gray-600">
                {"I'm here to help you with information about our financial and business performance"}
            </h3>
            <div class="categories grid grid-cols-1 md:grid-cols-3 gap-4 mt-6 w-full max-w-5xl">
                { for CATEGORIES.iter().map(|category| html! {
                    <CategoryCard category={*category} on_ask={props.on_ask.clone()} />
                }) }
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct CategoryProps {
    category: SuggestionCategory,
    on_ask: Callback<String>,
}

#[function_component(CategoryCard)]
fn category_card(props: &CategoryProps) -> Html {
    let category = props.category;

    html! {
        <div class="category card bg-base-100 shadow">
            <div class="card-body gap-3">
                <div class="category-header flex items-center gap-2">
                    <img src={category.icon} alt={format!("{} Icon", category.title)} class="icon w-8 h-8" />
                    <h2 class="card-title">{category.title}</h2>
                </div>
                { for category.questions.iter().map(|question| {
                    let on_ask = props.on_ask.clone();
                    let question = *question;
                    html! {
                        <div
                            class="question-box cursor-pointer rounded-box border p-3 text-left hover:bg-base-200"
                            onclick={Callback::from(move |_| {
                                log::debug!("Suggested question picked: {}", question);
                                on_ask.emit(question.to_string());
                            })}
                        >
                            {question}
                        </div>
                    }
                }) }
            </div>
        </div>
    }
}
