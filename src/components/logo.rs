//! Brand mark used in the header, footer, and login modal.

use leptos::prelude::*;

/// Rendered size of the mark.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LogoSize {
    Sm,
    #[default]
    Md,
    Lg,
}

impl LogoSize {
    fn css_class(self) -> &'static str {
        match self {
            LogoSize::Sm => "logo logo--sm",
            LogoSize::Md => "logo logo--md",
            LogoSize::Lg => "logo logo--lg",
        }
    }
}

/// The Third Eye Freight mark: an eye badge with an optional wordmark.
#[component]
pub fn Logo(
    #[prop(default = LogoSize::Md)] size: LogoSize,
    #[prop(default = true)] show_text: bool,
) -> impl IntoView {
    view! {
        <div class=size.css_class()>
            <div class="logo__badge">
                <span class="logo__eye">"◉"</span>
                <span class="logo__truck">"▮▸"</span>
            </div>
            <Show when=move || show_text>
                <div class="logo__wordmark">
                    <span class="logo__name">"Third Eye"</span>
                    <span class="logo__tag">"FREIGHT"</span>
                </div>
            </Show>
        </div>
    }
}
