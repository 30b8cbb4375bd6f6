#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BillCategory {
    pub id: &'static str,
    pub name: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BillProvider {
    pub id: &'static str,
    pub name: &'static str,
    pub logo_url: &'static str,
}

pub const BILL_CATEGORIES: [BillCategory; 4] = [
    BillCategory { id: "airtime", name: "Airtime" },
    BillCategory { id: "data", name: "Internet Data" },
    BillCategory { id: "electricity", name: "Electricity" },
    BillCategory { id: "tv", name: "TV Subscription" },
];

const AIRTIME: [BillProvider; 4] = [
    BillProvider { id: "mtn", name: "MTN", logo_url: const_logo::MTN },
    BillProvider { id: "airtel", name: "Airtel", logo_url: const_logo::AIRTEL },
    BillProvider { id: "glo", name: "Glo", logo_url: const_logo::GLO },
    BillProvider { id: "9mobile", name: "9Mobile", logo_url: const_logo::NINE_MOBILE },
];

const DATA: [BillProvider; 4] = [
    BillProvider { id: "mtn", name: "MTN Data", logo_url: const_logo::MTN },
    BillProvider { id: "airtel", name: "Airtel Data", logo_url: const_logo::AIRTEL },
    BillProvider { id: "glo", name: "Glo Data", logo_url: const_logo::GLO },
    BillProvider { id: "9mobile", name: "9Mobile Data", logo_url: const_logo::NINE_MOBILE },
];

const ELECTRICITY: [BillProvider; 3] = [
    BillProvider {
        id: "ekedc",
        name: "Eko Electric",
        logo_url: "https://www.ekedp.com/wp-content/uploads/2020/02/ekedc-logo.png",
    },
    BillProvider {
        id: "ikedc",
        name: "Ikeja Electric",
        logo_url: "https://www.ikejaelectric.com/wp-content/uploads/2020/04/ikeja-electric-logo.png",
    },
    BillProvider {
        id: "aedc",
        name: "Abuja Electric",
        logo_url: "https://www.abujaelectricity.com/wp-content/uploads/2020/04/aedc-logo.png",
    },
];

const TV: [BillProvider; 3] = [
    BillProvider { id: "dstv", name: "DSTV", logo_url: const_logo::DSTV },
    BillProvider { id: "gotv", name: "GoTV", logo_url: const_logo::GOTV },
    BillProvider { id: "startimes", name: "StarTimes", logo_url: const_logo::STARTIMES },
];

mod const_logo {
    pub const MTN: &str =
        "https://upload.wikimedia.org/wikipedia/commons/thumb/9/93/New_MTN_Logo.svg/512px-New_MTN_Logo.svg.png";
    pub const AIRTEL: &str =
        "https://upload.wikimedia.org/wikipedia/commons/thumb/7/72/Airtel_logo.svg/512px-Airtel_logo.svg.png";
    pub const GLO: &str = "https://upload.wikimedia.org/wikipedia/commons/thumb/5/5f/Globacom_Limited_Logo.svg/512px-Globacom_Limited_Logo.svg.png";
    pub const NINE_MOBILE: &str =
        "https://upload.wikimedia.org/wikipedia/commons/thumb/4/4a/9mobile_Logo.png/512px-9mobile_Logo.png";
    pub const DSTV: &str =
        "https://upload.wikimedia.org/wikipedia/commons/thumb/e/e9/DSTV_Logo.svg/512px-DSTV_Logo.svg.png";
    pub const GOTV: &str =
        "https://upload.wikimedia.org/wikipedia/commons/thumb/1/11/GOtv_logo.svg/512px-GOtv_logo.svg.png";
    pub const STARTIMES: &str = "https://upload.wikimedia.org/wikipedia/commons/thumb/e/e9/StarTimes_logo.svg/512px-StarTimes_logo.svg.png";
}

/// Providers offered under a category id. Unknown ids yield an empty list.
pub fn providers_for(category_id: &str) -> &'static [BillProvider] {
    match category_id {
        "airtime" => &AIRTIME,
        "data" => &DATA,
        "electricity" => &ELECTRICITY,
        "tv" => &TV,
        _ => &[],
    }
}
