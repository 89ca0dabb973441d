use crate::engine::Color;
use crate::util::hue_class_label;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct LegendRowProps {
    pub color: AttrValue,
    pub label: AttrValue,
    /// Swatch height in px; rockets use a thin stroke.
    #[prop_or(12)]
    pub swatch_height: u32,
}

#[function_component(LegendRow)]
pub fn legend_row(props: &LegendRowProps) -> Html {
    let swatch = format!(
        "display:inline-block; width:12px; height:{}px; background:{}; border-radius:2px;",
        props.swatch_height, props.color
    );
    html! { <div style="display:flex; align-items:center; gap:8px; margin:3px 0;"> <span style={swatch}></span> <span>{ props.label.clone() }</span> </div> }
}

#[derive(Properties, PartialEq, Clone)]
pub struct LegendPanelProps {
    pub rocket_count: usize,
}

#[function_component]
pub fn LegendPanel(props: &LegendPanelProps) -> Html {
    // hues repeat every six rockets, so each swatch lists every rocket sharing it
    let rockets = (0..props.rocket_count.min(6)).map(|i| {
        html! { <LegendRow
            color={Color::rocket(i).to_string()}
            label={hue_class_label(i, props.rocket_count)}
            swatch_height={3}
        /> }
    });
    html! {<div style="background:#f6f8fa; border:1px solid #d0d7de; border-radius:8px; padding:8px; min-width:170px;">
        <div style="font-weight:600; margin-bottom:4px;">{"Legend"}</div>
        <LegendRow color={Color::TOWER.to_string()} label="Tower (shaded: range)" />
        <LegendRow color={Color::HOUSE.to_string()} label="Target" />
        <LegendRow color={Color::INTERCEPT.to_string()} label="Intercepted (X)" />
        { for rockets }
    </div>}
}
