use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct HeaderProps {
    #[prop_or(AttrValue::Static("AIRDEFENSE.CLOUD"))]
    pub title: AttrValue,
}

#[function_component]
pub fn Header(props: &HeaderProps) -> Html {
    html! {<div id="top-bar" style="background:#1976d2; color:#fff; padding:12px 20px; font-size:20px; font-weight:500; box-shadow:0 2px 4px rgba(0,0,0,0.2);">
        { props.title.clone() }
    </div>}
}
