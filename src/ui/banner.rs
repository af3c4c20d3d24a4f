/// Username (unitag) promotional banner
///
/// Layout and button handling are pure functions; the component only renders
/// the layout and forwards the resulting commands to its `on_command` callback.
use crate::messaging::requests::Address;
use patternfly_yew::prelude::*;
use serde::{Deserialize, Serialize};
use yew::prelude::*;

pub const UNITAG_SUFFIX_NO_LEADING_DOT: &str = "uni.eth";
pub const UNITAG_BANNER_ACTION_TAKEN: &str = "Unitag Banner Action Taken";
pub const UNITAGS_INTRO_MODAL: &str = "unitags-intro";

pub const UNITAGS_BANNER_VERTICAL_LIGHT: &str = "assets/unitags/banner-vertical-light.png";
pub const UNITAGS_BANNER_VERTICAL_DARK: &str = "assets/unitags/banner-vertical-dark.png";

const IMAGE_ASPECT_RATIO: f64 = 0.42;
const IMAGE_SCREEN_WIDTH_PROPORTION: f64 = 0.18;
const COMPACT_IMAGE_SCREEN_WIDTH_PROPORTION: f64 = 0.15;

const SHORT_DEVICE_MAX_HEIGHT: f64 = 736.0;
const FALLBACK_WIDTH: f64 = 390.0;
const FALLBACK_HEIGHT: f64 = 844.0;

/// Screen the banner is shown on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntryPoint {
    Home,
    Settings,
}

impl EntryPoint {
    pub fn analytics_name(&self) -> &'static str {
        match self {
            EntryPoint::Home => "home",
            EntryPoint::Settings => "settings",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BannerAction {
    Claim,
    Dismiss,
}

/// Payload of the banner analytics event
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BannerActionTaken {
    pub action: BannerAction,
    pub entry_point: &'static str,
}

/// Side effects requested by the banner
#[derive(Debug, Clone, PartialEq)]
pub enum BannerCommand {
    DismissKeyboard,
    SendAnalytics {
        event: &'static str,
        properties: BannerActionTaken,
    },
    /// Navigate to the unitag stack's claim screen
    NavigateToClaim { address: Address, entry_point: EntryPoint },
    /// Open the intro modal by name with its initial state
    OpenModal {
        name: &'static str,
        address: Address,
        entry_point: EntryPoint,
    },
    SetHasSkippedUnitagPrompt(bool),
}

/// What the handlers need to decide which commands to issue
#[derive(Debug, Clone, PartialEq)]
pub struct BannerContext {
    pub address: Address,
    pub entry_point: EntryPoint,
    pub has_completed_intro: bool,
}

fn analytics(action: BannerAction, entry_point: EntryPoint) -> BannerCommand {
    BannerCommand::SendAnalytics {
        event: UNITAG_BANNER_ACTION_TAKEN,
        properties: BannerActionTaken {
            action,
            entry_point: entry_point.analytics_name(),
        },
    }
}

pub fn on_press_claim_now(ctx: &BannerContext) -> Vec<BannerCommand> {
    let next = if ctx.has_completed_intro {
        BannerCommand::NavigateToClaim {
            address: ctx.address.clone(),
            entry_point: ctx.entry_point,
        }
    } else {
        BannerCommand::OpenModal {
            name: UNITAGS_INTRO_MODAL,
            address: ctx.address.clone(),
            entry_point: ctx.entry_point,
        }
    };

    vec![
        BannerCommand::DismissKeyboard,
        analytics(BannerAction::Claim, ctx.entry_point),
        next,
    ]
}

pub fn on_press_maybe_later(ctx: &BannerContext) -> Vec<BannerCommand> {
    vec![
        analytics(BannerAction::Dismiss, ctx.entry_point),
        BannerCommand::SetHasSkippedUnitagPrompt(true),
    ]
}

/// Image geometry and visibility for one render
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BannerLayout {
    pub compact: bool,
    pub image_width: f64,
    pub image_height: f64,
    pub image_margin_right: f64,
    pub image_top: f64,
    pub show_subtitle: bool,
}

impl BannerLayout {
    pub fn compute(compact: bool, full_width: f64, is_short_device: bool) -> BannerLayout {
        let proportion = if compact {
            COMPACT_IMAGE_SCREEN_WIDTH_PROPORTION
        } else {
            IMAGE_SCREEN_WIDTH_PROPORTION
        };
        let image_width = proportion * full_width;
        let image_height = image_width / IMAGE_ASPECT_RATIO;

        let (margin_divisor, top_factor) = if compact { (6.0, 0.19) } else { (12.0, 0.22) };

        BannerLayout {
            compact,
            image_width,
            image_height,
            image_margin_right: -(image_width / margin_divisor),
            image_top: -(image_height * top_factor),
            show_subtitle: !compact && !is_short_device,
        }
    }
}

pub fn image_uri(dark_mode: bool) -> &'static str {
    if dark_mode {
        UNITAGS_BANNER_VERTICAL_DARK
    } else {
        UNITAGS_BANNER_VERTICAL_LIGHT
    }
}

pub fn is_short_device(full_height: f64) -> bool {
    full_height < SHORT_DEVICE_MAX_HEIGHT
}

fn device_dimensions() -> (f64, f64) {
    let Some(window) = web_sys::window() else {
        return (FALLBACK_WIDTH, FALLBACK_HEIGHT);
    };
    let width = window.inner_width().ok().and_then(|v| v.as_f64());
    let height = window.inner_height().ok().and_then(|v| v.as_f64());
    (width.unwrap_or(FALLBACK_WIDTH), height.unwrap_or(FALLBACK_HEIGHT))
}

#[derive(Properties, PartialEq)]
pub struct UnitagBannerProps {
    pub address: Address,
    #[prop_or(false)]
    pub compact: bool,
    pub entry_point: EntryPoint,
    #[prop_or(false)]
    pub has_completed_intro: bool,
    #[prop_or(false)]
    pub dark_mode: bool,
    pub on_command: Callback<BannerCommand>,
}

#[function_component(UnitagBanner)]
pub fn unitag_banner(props: &UnitagBannerProps) -> Html {
    let (full_width, full_height) = device_dimensions();
    let layout = BannerLayout::compute(props.compact, full_width, is_short_device(full_height));

    let ctx = BannerContext {
        address: props.address.clone(),
        entry_point: props.entry_point,
        has_completed_intro: props.has_completed_intro,
    };

    let on_claim = {
        let ctx = ctx.clone();
        let on_command = props.on_command.clone();
        Callback::from(move |_: MouseEvent| {
            log::debug!("Unitag banner claim pressed on {:?}", ctx.entry_point);
            for command in on_press_claim_now(&ctx) {
                on_command.emit(command);
            }
        })
    };

    let on_later = {
        let on_command = props.on_command.clone();
        Callback::from(move |_: MouseEvent| {
            for command in on_press_maybe_later(&ctx) {
                on_command.emit(command);
            }
        })
    };

    let banner_class = if layout.compact {
        "unitag-banner unitag-banner--compact"
    } else {
        "unitag-banner unitag-banner--full"
    };

    html! {
        <div class={banner_class}>
            if layout.compact {
                <div class="unitag-banner__content unitag-banner__content--pressable" onclick={on_claim}>
                    <p class="unitag-banner__title">
                        {"Claim your "}
                        <span class="unitag-banner__highlight">{UNITAG_SUFFIX_NO_LEADING_DOT}</span>
                        {" username"}
                    </p>
                </div>
            } else {
                <div class="unitag-banner__content">
                    <div class="unitag-banner__text">
                        <p class="unitag-banner__title">
                            {format!("Claim your {} username", UNITAG_SUFFIX_NO_LEADING_DOT)}
                        </p>
                        if layout.show_subtitle {
                            <p class="unitag-banner__subtitle">
                                {"Build a personalized web3 profile and easily share your address with friends."}
                            </p>
                        }
                    </div>
                    <div class="unitag-banner__actions">
                        <Button onclick={on_claim} variant={ButtonVariant::Primary}>
                            {"Claim now"}
                        </Button>
                        <Button onclick={on_later} variant={ButtonVariant::Link}>
                            {"Maybe later"}
                        </Button>
                    </div>
                </div>
            }
            <div
                class="unitag-banner__image-frame"
                style={format!("margin-right: {}px; width: {}px;", layout.image_margin_right, layout.image_width)}
            >
                <img
                    class="unitag-banner__image"
                    src={image_uri(props.dark_mode)}
                    width={layout.image_width.to_string()}
                    height={layout.image_height.to_string()}
                    style={format!("position: absolute; top: {}px;", layout.image_top)}
                />
            </div>
        </div>
    }
}
