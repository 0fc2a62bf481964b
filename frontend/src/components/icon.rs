use serde::Deserialize;
use yew::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Icon {
    Calendar,
    Clock,
    Users,
    Star,
    CheckCircle,
    BookOpen,
    Heart,
    Brain,
    Trophy,
    Zap,
}

impl Icon {
    fn glyph(self) -> &'static str {
        match self {
            Icon::Calendar => "📅",
            Icon::Clock => "🕖",
            Icon::Users => "👥",
            Icon::Star => "★",
            Icon::CheckCircle => "✔",
            Icon::BookOpen => "📖",
            Icon::Heart => "❤",
            Icon::Brain => "🧠",
            Icon::Trophy => "🏆",
            Icon::Zap => "⚡",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct IconViewProps {
    pub icon: Icon,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(IconView)]
pub fn icon_view(props: &IconViewProps) -> Html {
    html! {
        <span class={classes!("icon", props.class.clone())} aria-hidden="true">
            { props.icon.glyph() }
        </span>
    }
}
