use dioxus::prelude::*;

use crate::components::tooltip::{Placement, Tooltip};
use crate::context::{use_ambient, use_config, use_scoped_context};
use crate::utils::{px, ClassNames};

/// Avatar size preset or custom pixel size
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AvatarSize {
    Small,
    #[default]
    Default,
    Large,
    Px(u32),
}

impl AvatarSize {
    /// Parse a size keyword or pixel count; anything else is `Default`
    pub fn from_str(s: &str) -> Self {
        match s.trim() {
            "small" => AvatarSize::Small,
            "large" => AvatarSize::Large,
            other => match other.trim_end_matches("px").parse::<u32>() {
                Ok(value) => AvatarSize::Px(value).normalized(),
                Err(_) => AvatarSize::Default,
            },
        }
    }

    /// A zero pixel size can't be drawn
    pub fn normalized(self) -> Self {
        match self {
            AvatarSize::Px(0) => AvatarSize::Default,
            other => other,
        }
    }

    fn class_suffix(&self) -> Option<&'static str> {
        match self {
            AvatarSize::Small => Some("sm"),
            AvatarSize::Large => Some("lg"),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AvatarShape {
    #[default]
    Circle,
    Square,
}

impl AvatarShape {
    pub fn as_str(&self) -> &'static str {
        match self {
            AvatarShape::Circle => "circle",
            AvatarShape::Square => "square",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "square" => AvatarShape::Square,
            _ => AvatarShape::Circle,
        }
    }
}

/// What an avatar ends up showing
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AvatarContent {
    Image,
    Icon,
    Text,
    Empty,
}

/// Image first unless it failed to load, then icon, then text.
pub fn avatar_content(has_src: bool, image_failed: bool, has_icon: bool, has_text: bool) -> AvatarContent {
    if has_src && !image_failed {
        AvatarContent::Image
    } else if has_icon {
        AvatarContent::Icon
    } else if has_text {
        AvatarContent::Text
    } else {
        AvatarContent::Empty
    }
}

pub fn avatar_class(
    prefix: &str,
    size: AvatarSize,
    shape: AvatarShape,
    content: AvatarContent,
    rtl: bool,
    class: Option<&str>,
) -> String {
    ClassNames::new()
        .with(prefix)
        .with_opt(size.class_suffix().map(|s| format!("{}-{}", prefix, s)).as_deref())
        .with(format!("{}-{}", prefix, shape.as_str()))
        .with_if(content == AvatarContent::Image, format!("{}-image", prefix))
        .with_if(content == AvatarContent::Icon, format!("{}-icon", prefix))
        .with_if(rtl, format!("{}-rtl", prefix))
        .with_opt(class)
        .build()
}

/// Inline style for custom pixel sizes, followed by the caller's style.
/// `None` when there is nothing to set.
pub fn avatar_style(size: AvatarSize, content: AvatarContent, style: Option<&str>) -> Option<String> {
    let mut parts = Vec::new();
    if let AvatarSize::Px(value) = size {
        let font_size = if content == AvatarContent::Icon { value / 2 } else { 18 };
        parts.push(format!("width: {}", px(value)));
        parts.push(format!("height: {}", px(value)));
        parts.push(format!("line-height: {}", px(value)));
        parts.push(format!("font-size: {}", px(font_size)));
    }
    if let Some(style) = style.filter(|s| !s.trim().is_empty()) {
        parts.push(style.trim().trim_end_matches(';').to_string());
    }
    if parts.is_empty() {
        None
    } else {
        Some(parts.join("; "))
    }
}

/// Size and shape a group imposes on members that don't set their own
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AvatarGroupContext {
    pub size: Option<AvatarSize>,
    pub shape: Option<AvatarShape>,
}

#[derive(Props, Clone, PartialEq)]
pub struct AvatarProps {
    pub size: Option<AvatarSize>,
    pub shape: Option<AvatarShape>,
    pub src: Option<String>,
    pub srcset: Option<String>,
    pub alt: Option<String>,
    pub icon: Option<Element>,
    /// Text shown when there is no image or icon
    pub text: Option<String>,
    #[props(default = true)]
    pub draggable: bool,
    pub on_error: Option<EventHandler<()>>,
    pub class: Option<String>,
    pub style: Option<String>,
    pub prefix_cls: Option<String>,
}

#[component]
pub fn Avatar(props: AvatarProps) -> Element {
    let config = use_config();
    let group = use_ambient::<AvatarGroupContext>();
    // Source that failed to load; a new src clears the failure
    let mut failed_src = use_signal(|| None::<String>);

    let prefix = config.prefix_for("avatar", props.prefix_cls.as_deref());
    let size = props.size.or(group.size).unwrap_or_default().normalized();
    let shape = props.shape.or(group.shape).unwrap_or_default();

    let image_failed = props.src.is_some() && failed_src.read().as_deref() == props.src.as_deref();
    let content = avatar_content(
        props.src.is_some(),
        image_failed,
        props.icon.is_some(),
        props.text.as_deref().is_some_and(|t| !t.is_empty()),
    );

    let class = avatar_class(
        &prefix,
        size,
        shape,
        content,
        config.direction.is_rtl(),
        props.class.as_deref(),
    );
    let style = avatar_style(size, content, props.style.as_deref());

    let src = props.src.clone().unwrap_or_default();
    let errored_src = src.clone();
    let on_error = props.on_error;
    let text = props.text.clone().unwrap_or_default();

    rsx! {
        span {
            class: "{class}",
            style,
            match content {
                AvatarContent::Image => rsx! {
                    img {
                        src: "{src}",
                        srcset: props.srcset.clone(),
                        alt: props.alt.clone(),
                        draggable: props.draggable,
                        onerror: move |_| {
                            log::debug!("Avatar image failed to load: {}", errored_src);
                            failed_src.set(Some(errored_src.clone()));
                            if let Some(handler) = on_error {
                                handler.call(());
                            }
                        },
                    }
                },
                AvatarContent::Icon => rsx! { {props.icon.clone()} },
                AvatarContent::Text => rsx! {
                    span {
                        class: "{prefix}-string",
                        "{text}"
                    }
                },
                AvatarContent::Empty => rsx! {},
            }
        }
    }
}

/// Number of avatars shown directly and number folded into the overflow
/// indicator.
pub fn split_overflow(total: usize, max_count: Option<usize>) -> (usize, usize) {
    match max_count {
        Some(max) if max < total => (max, total - max),
        _ => (total, 0),
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct AvatarGroupProps {
    /// Avatars in display order
    pub avatars: Vec<Element>,
    pub max_count: Option<usize>,
    /// Extra style for the `+N` indicator
    pub max_style: Option<String>,
    #[props(default = Placement::Top)]
    pub max_popover_placement: Placement,
    pub size: Option<AvatarSize>,
    pub shape: Option<AvatarShape>,
    pub class: Option<String>,
    pub style: Option<String>,
    pub prefix_cls: Option<String>,
}

/// Stacks avatars with an overflow indicator past `max_count`
#[component]
pub fn AvatarGroup(props: AvatarGroupProps) -> Element {
    let config = use_config();
    use_scoped_context(AvatarGroupContext {
        size: props.size,
        shape: props.shape,
    });

    let prefix = config.prefix_for("avatar", props.prefix_cls.as_deref());
    let group_prefix = format!("{}-group", prefix);
    let class = ClassNames::new()
        .with(group_prefix.clone())
        .with_if(config.direction.is_rtl(), format!("{}-rtl", group_prefix))
        .with_opt(props.class.as_deref())
        .build();

    let (shown, hidden) = split_overflow(props.avatars.len(), props.max_count);
    let visible_avatars = props.avatars[..shown].to_vec();
    let hidden_avatars = props.avatars[shown..].to_vec();

    rsx! {
        div {
            class: "{class}",
            style: props.style.clone(),
            for avatar in visible_avatars {
                {avatar}
            }
            if hidden > 0 {
                Tooltip {
                    placement: props.max_popover_placement,
                    overlay_class_name: format!("{}-popover", group_prefix),
                    title: rsx! {
                        for avatar in hidden_avatars {
                            {avatar}
                        }
                    },
                    Avatar {
                        style: props.max_style.clone(),
                        text: format!("+{}", hidden),
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(app: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn test_size_parsing_falls_back_to_default() {
        assert_eq!(AvatarSize::from_str("small"), AvatarSize::Small);
        assert_eq!(AvatarSize::from_str("large"), AvatarSize::Large);
        assert_eq!(AvatarSize::from_str("64"), AvatarSize::Px(64));
        assert_eq!(AvatarSize::from_str("48px"), AvatarSize::Px(48));
        assert_eq!(AvatarSize::from_str("0"), AvatarSize::Default);
        assert_eq!(AvatarSize::from_str("huge"), AvatarSize::Default);
        assert_eq!(AvatarSize::from_str("-3"), AvatarSize::Default);
    }

    #[test]
    fn test_shape_parsing() {
        assert_eq!(AvatarShape::from_str("square"), AvatarShape::Square);
        assert_eq!(AvatarShape::from_str("hexagon"), AvatarShape::Circle);
    }

    #[test]
    fn test_content_precedence() {
        assert_eq!(avatar_content(true, false, true, true), AvatarContent::Image);
        assert_eq!(avatar_content(true, true, true, true), AvatarContent::Icon);
        assert_eq!(avatar_content(true, true, false, true), AvatarContent::Text);
        assert_eq!(avatar_content(false, false, false, false), AvatarContent::Empty);
    }

    #[test]
    fn test_avatar_class() {
        let class = avatar_class(
            "bk-avatar",
            AvatarSize::Large,
            AvatarShape::Square,
            AvatarContent::Icon,
            true,
            Some("mine"),
        );
        assert_eq!(
            class,
            "bk-avatar bk-avatar-lg bk-avatar-square bk-avatar-icon bk-avatar-rtl mine"
        );

        let class = avatar_class(
            "bk-avatar",
            AvatarSize::Px(40),
            AvatarShape::Circle,
            AvatarContent::Image,
            false,
            None,
        );
        assert_eq!(class, "bk-avatar bk-avatar-circle bk-avatar-image");
    }

    #[test]
    fn test_custom_size_style() {
        let style = avatar_style(AvatarSize::Px(64), AvatarContent::Icon, None);
        assert_eq!(
            style.as_deref(),
            Some("width: 64px; height: 64px; line-height: 64px; font-size: 32px")
        );

        let style = avatar_style(AvatarSize::Px(40), AvatarContent::Text, Some("color: red;"));
        assert_eq!(
            style.as_deref(),
            Some("width: 40px; height: 40px; line-height: 40px; font-size: 18px; color: red")
        );

        assert_eq!(avatar_style(AvatarSize::Large, AvatarContent::Text, None), None);
        assert_eq!(avatar_style(AvatarSize::Default, AvatarContent::Text, Some("  ")), None);
    }

    #[test]
    fn test_split_overflow() {
        assert_eq!(split_overflow(5, None), (5, 0));
        assert_eq!(split_overflow(5, Some(2)), (2, 3));
        assert_eq!(split_overflow(5, Some(5)), (5, 0));
        assert_eq!(split_overflow(5, Some(9)), (5, 0));
        assert_eq!(split_overflow(3, Some(0)), (0, 3));
        assert_eq!(split_overflow(0, Some(0)), (0, 0));
    }

    #[test]
    fn test_preset_size_renders_without_style() {
        fn app() -> Element {
            rsx! { Avatar { size: AvatarSize::Large, text: "AB".to_string() } }
        }
        let html = render(app);
        assert!(html.contains("bk-avatar bk-avatar-lg bk-avatar-circle"));
        assert!(!html.contains("style="));
        assert!(html.contains("<span class=\"bk-avatar-string\">AB</span>"));
    }

    #[test]
    fn test_group_folds_overflow_into_counter() {
        fn app() -> Element {
            rsx! {
                AvatarGroup {
                    max_count: 1usize,
                    avatars: vec![
                        rsx! { Avatar { text: "A".to_string() } },
                        rsx! { Avatar { text: "B".to_string() } },
                        rsx! { Avatar { text: "C".to_string() } },
                    ],
                }
            }
        }
        let html = render(app);
        assert!(html.contains(">+2</span>"));
        assert!(html.contains(">A</span>"));
        assert!(!html.contains(">B</span>"));
    }
}
