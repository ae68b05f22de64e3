use bluekit::components::icons::UserIcon;
use bluekit::{Avatar, AvatarGroup, AvatarShape, AvatarSize};
use dioxus::prelude::*;

const TEAM: [&str; 6] = ["Ada", "Grace", "Linus", "Margaret", "Ken", "Barbara"];

#[component]
pub fn Avatars() -> Element {
    let mut max_count = use_signal(|| 3usize);
    let mut failures = use_signal(|| 0u32);

    let team: Vec<Element> = TEAM
        .iter()
        .map(|name| {
            let initial = name.chars().next().map(String::from).unwrap_or_default();
            rsx! {
                Avatar { key: "{name}", alt: name.to_string(), text: initial }
            }
        })
        .collect();

    rsx! {
        section {
            class: "gallery-page",
            h2 { "Sizes" }
            div {
                class: "gallery-row",
                Avatar { size: AvatarSize::Large, icon: rsx! { UserIcon {} } }
                Avatar { icon: rsx! { UserIcon {} } }
                Avatar { size: AvatarSize::Small, icon: rsx! { UserIcon {} } }
                Avatar { size: AvatarSize::Px(64), icon: rsx! { UserIcon {} } }
                Avatar { size: AvatarSize::from_str("enormous"), text: "?".to_string() }
            }

            h2 { "Shapes and content" }
            div {
                class: "gallery-row",
                Avatar { shape: AvatarShape::Square, text: "U".to_string() }
                Avatar { shape: AvatarShape::Square, icon: rsx! { UserIcon {} } }
                Avatar {
                    src: "https://example.invalid/missing.png".to_string(),
                    alt: "Broken image".to_string(),
                    text: "B".to_string(),
                    on_error: move |_| failures += 1,
                }
                span { "Image fallbacks: {failures}" }
            }

            h2 { "Group" }
            div {
                class: "gallery-row",
                AvatarGroup {
                    avatars: team,
                    max_count: max_count(),
                    max_style: "color: #f56a00; background-color: #fde3cf".to_string(),
                    size: AvatarSize::Large,
                }
                button {
                    onclick: move |_| {
                        let next = (max_count() + 1) % (TEAM.len() + 1);
                        max_count.set(next);
                    },
                    "Show {max_count} before overflow"
                }
            }
        }
    }
}
