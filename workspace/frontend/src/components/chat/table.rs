use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    /// Table block already pretty-printed as JSON
    pub pretty: String,
}

#[function_component(TableData)]
pub fn table_data(props: &Props) -> Html {
    html! {
        <div class="table-container overflow-x-auto mt-2">
            <pre class="table-data text-xs bg-base-200 rounded p-2">{&props.pretty}</pre>
        </div>
    }
}
