//! Legal links and compile control under the embedded sandbox editor.

use leptos::prelude::*;

use crate::app::ChromeContext;
use crate::state::actions::MenuAction;
use crate::state::sandbox_footer::SandboxFooterModel;

/// Footer rendered once at mount; it reads only the theme.
#[component]
pub fn SandboxFooter() -> impl IntoView {
    let ctx = expect_context::<ChromeContext>();
    let footer = SandboxFooterModel::new(&ctx.config.theme);
    let on_compile = ctx.on_click(MenuAction::Compile);

    let organization = footer.organization.map(|(name, url)| {
        view! { <a class="item" target="_blank" rel="noopener" href=url>{name}</a> }
    });

    view! {
        <div class="ui horizontal small divided link list sandboxfooter">
            {organization}
            <a target="_blank" class="item" href=footer.terms_url rel="noopener">"Terms of Use"</a>
            <a target="_blank" class="item" href=footer.privacy_url rel="noopener">"Privacy"</a>
            <span class="item">
                <a class="ui thin portrait only" title=footer.compile_tooltip on:click=on_compile>
                    <i class=format!("icon {}", footer.compile_icon) aria-hidden="true"></i>
                    {footer.compile_label}
                </a>
            </span>
        </div>
    }
}
