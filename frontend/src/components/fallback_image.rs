use log::debug;
use yew::prelude::*;

use crate::config;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ImageLoad {
    #[default]
    Pending,
    Loaded,
    Failed,
}

impl ImageLoad {
    /// Records the first load outcome. Later outcomes are ignored, there is
    /// no retry.
    pub fn resolve(self, loaded: bool) -> Self {
        match self {
            ImageLoad::Pending if loaded => ImageLoad::Loaded,
            ImageLoad::Pending => ImageLoad::Failed,
            settled => settled,
        }
    }

    pub fn failed(self) -> bool {
        self == ImageLoad::Failed
    }

    /// Caption for the placeholder label, `None` once the image is showing.
    pub fn caption(self) -> Option<&'static str> {
        match self {
            ImageLoad::Pending => Some("Loading"),
            ImageLoad::Failed => Some("Image missing"),
            ImageLoad::Loaded => None,
        }
    }
}

/// Load outcome tagged with the source it belongs to, so a new `src` starts
/// over from `Pending`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrackedLoad {
    src: AttrValue,
    load: ImageLoad,
}

impl Default for TrackedLoad {
    fn default() -> Self {
        Self {
            src: AttrValue::from(""),
            load: ImageLoad::Pending,
        }
    }
}

impl TrackedLoad {
    pub fn for_src(&self, src: &AttrValue) -> ImageLoad {
        if &self.src == src {
            self.load
        } else {
            ImageLoad::Pending
        }
    }

    pub fn record(&self, src: &AttrValue, loaded: bool) -> Self {
        Self {
            src: src.clone(),
            load: self.for_src(src).resolve(loaded),
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct FallbackImageProps {
    /// File name under the asset directory, also shown on the placeholder.
    pub src: AttrValue,
    pub alt: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(FallbackImage)]
pub fn fallback_image(props: &FallbackImageProps) -> Html {
    let tracked = use_state_eq(TrackedLoad::default);
    let load = tracked.for_src(&props.src);

    let onload = {
        let tracked = tracked.clone();
        let src = props.src.clone();
        Callback::from(move |_: Event| tracked.set(tracked.record(&src, true)))
    };

    let onerror = {
        let tracked = tracked.clone();
        let src = props.src.clone();
        Callback::from(move |_: Event| {
            debug!("Image {} failed to load", src);
            tracked.set(tracked.record(&src, false));
        })
    };

    html! {
        <div class={classes!("fallback-image", props.class.clone(), load.failed().then(|| "failed"))}>
            {
                if !load.failed() {
                    html! {
                        <img
                            key={props.src.to_string()}
                            src={config::asset_url(&props.src)}
                            alt={props.alt.clone()}
                            loading="lazy"
                            onload={onload}
                            onerror={onerror}
                        />
                    }
                } else {
                    html! {}
                }
            }
            {
                if let Some(caption) = load.caption() {
                    html! {
                        <div class="fallback-label">
                            <span class="fallback-caption">{caption}</span>
                            <span class="fallback-name">{props.src.clone()}</span>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_pending_with_label() {
        let load = ImageLoad::default();
        assert!(!load.failed());
        assert_eq!(load.caption(), Some("Loading"));
    }

    #[test]
    fn successful_load_removes_label_for_good() {
        let load = ImageLoad::default().resolve(true);
        assert!(!load.failed());
        assert_eq!(load.caption(), None);
        assert_eq!(load.resolve(false), ImageLoad::Loaded);
    }

    #[test]
    fn failed_load_sticks() {
        let load = ImageLoad::default().resolve(false);
        assert!(load.failed());
        assert_eq!(load.caption(), Some("Image missing"));
        assert!(load.resolve(true).failed());
    }

    #[test]
    fn new_source_starts_over_from_pending() {
        let old = AttrValue::from("old.jpg");
        let new = AttrValue::from("new.jpg");
        let tracked = TrackedLoad::default().record(&old, false);
        assert!(tracked.for_src(&old).failed());
        assert_eq!(tracked.for_src(&new), ImageLoad::Pending);

        let tracked = tracked.record(&new, true);
        assert_eq!(tracked.for_src(&new), ImageLoad::Loaded);
        assert_eq!(tracked.for_src(&old), ImageLoad::Pending);
    }
}
