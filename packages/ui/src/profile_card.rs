use dioxus::prelude::*;
use profiles::ProfileCardView;

/// One profile: round avatar, full name, email.
#[component]
pub fn ProfileCard(card: ProfileCardView) -> Element {
    rsx! {
        div {
            class: "profile-card col-md-4 bg-light p-3",
            img {
                class: "img-fluid rounded-circle",
                src: "{card.avatar_url}",
                alt: "Avatar",
            }
            h2 { class: "mb-0", "{card.full_name}" }
            p { class: "mb-0", "{card.email}" }
        }
    }
}

/// Grid of cards in the given order.
#[component]
pub fn ProfileGrid(cards: Vec<ProfileCardView>) -> Element {
    rsx! {
        div {
            class: "container mx-auto p-4",
            div {
                class: "row",
                for (key, card) in cards.into_iter().map(|card| (card.index, card)) {
                    ProfileCard { key: "{key}", card: card }
                }
            }
        }
    }
}
