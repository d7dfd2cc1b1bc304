use finchat_common::chart::{ChartFigure, ChartRender};
use serde_json::Value;
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;
use yew::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = Plotly)]
    fn newPlot(div_id: &str, data: JsValue, layout: JsValue, config: JsValue);
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub turn: usize,
    pub chart: ChartRender,
}

#[function_component(ResponseChart)]
pub fn response_chart(props: &Props) -> Html {
    match &props.chart {
        ChartRender::Empty => html! {},
        ChartRender::Placeholder(text) => html! {
            <div class="chart-wrapper mt-2">
                <p class="no-data text-sm text-gray-500">{text}</p>
            </div>
        },
        ChartRender::Figure(figure) => html! {
            <div class="chart-wrapper mt-2">
                <PlotlyFigure div_id={format!("turn-chart-{}", props.turn)} figure={(**figure).clone()} />
            </div>
        },
    }
}

#[derive(Properties, PartialEq)]
struct PlotlyFigureProps {
    div_id: String,
    figure: ChartFigure,
}

#[function_component(PlotlyFigure)]
fn plotly_figure(props: &PlotlyFigureProps) -> Html {
    let container_ref = use_node_ref();

    use_effect_with(
        (container_ref.clone(), props.figure.clone(), props.div_id.clone()),
        move |(container_ref, figure, div_id)| {
            if let Some(element) = container_ref.cast::<HtmlElement>() {
                element.set_id(div_id);

                match (to_js(&figure.data), to_js(&figure.layout), to_js(&ChartFigure::config())) {
                    (Some(data), Some(layout), Some(config)) => {
                        log::debug!("Plotting {} chart into #{}", figure.kind.as_str(), div_id);
                        newPlot(div_id, data, layout, config);
                    }
                    _ => log::error!("Could not convert chart #{} for Plotly", div_id),
                }
            }
            || ()
        },
    );

    html! {
        <div class={format!("{}-chart-wrapper", props.figure.kind.as_str())}>
            <div ref={container_ref} style="width:100%; height:320px;"></div>
        </div>
    }
}

// Serialize to JSON and parse as a JS object
fn to_js(value: &Value) -> Option<JsValue> {
    let json = serde_json::to_string(value).ok()?;
    js_sys::JSON::parse(&json).ok()
}
