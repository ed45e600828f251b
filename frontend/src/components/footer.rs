use chrono::Datelike;
use yew::prelude::*;

use crate::components::action_link::ActionLink;
use crate::config::SITE_NAME;

pub fn copyright_line(year: i32) -> String {
    format!("© {} {}. All rights reserved.", year, SITE_NAME)
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = chrono::Local::now().year();

    html! {
        <footer class="site-footer">
            <div class="footer-content">
                <h3>{SITE_NAME}</h3>
                <p class="footer-tagline">{"Certified Health Coach & Registered Social Worker"}</p>
                <ActionLink label="Say Hello on WhatsApp" icon={true} />
                <div class="footer-rule"></div>
                <p class="footer-copyright">{copyright_line(year)}</p>
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copyright_names_site_and_year() {
        assert_eq!(
            copyright_line(2026),
            "© 2026 Your Health Prof. All rights reserved."
        );
    }
}
