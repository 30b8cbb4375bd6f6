#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GiftCard {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub logo_url: &'static str,
}

pub const GIFT_CARDS: [GiftCard; 6] = [
    GiftCard {
        id: "amazon",
        name: "Amazon Gift Card",
        description: "Shop on Amazon.com",
        logo_url: "https://upload.wikimedia.org/wikipedia/commons/thumb/a/a9/Amazon_logo.svg/512px-Amazon_logo.svg.png",
    },
    GiftCard {
        id: "itunes",
        name: "iTunes Gift Card",
        description: "For Apple App Store & iTunes",
        logo_url: "https://upload.wikimedia.org/wikipedia/commons/thumb/d/df/ITunes_logo.svg/512px-ITunes_logo.svg.png",
    },
    GiftCard {
        id: "google-play",
        name: "Google Play Gift Card",
        description: "For Google Play Store",
        logo_url: "https://upload.wikimedia.org/wikipedia/commons/thumb/7/78/Google_Play_Store_badge_EN.svg/512px-Google_Play_Store_badge_EN.svg.png",
    },
    GiftCard {
        id: "steam",
        name: "Steam Gift Card",
        description: "For PC gaming on Steam",
        logo_url: "https://upload.wikimedia.org/wikipedia/commons/thumb/8/83/Steam_icon_logo.svg/512px-Steam_icon_logo.svg.png",
    },
    GiftCard {
        id: "xbox",
        name: "Xbox Gift Card",
        description: "For Xbox games and services",
        logo_url: "https://upload.wikimedia.org/wikipedia/commons/thumb/f/f9/Xbox_one_logo.svg/512px-Xbox_one_logo.svg.png",
    },
    GiftCard {
        id: "playstation",
        name: "PlayStation Gift Card",
        description: "For PlayStation games and services",
        logo_url: "https://upload.wikimedia.org/wikipedia/commons/thumb/0/00/PlayStation_logo.svg/512px-PlayStation_logo.svg.png",
    },
];
