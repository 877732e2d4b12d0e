//! Static keyword data for topic matching.
//!
//! One array per topic per language. English arrays double as the
//! lingua-franca list checked for every language. All entries are
//! lowercase; native-script entries are stems so that inflected forms
//! still match.

// --- Reach / transport ---

pub(crate) const REACH_EN: &[&str] = &[
    "reach",
    "how do i get",
    "how to get",
    "how can i get",
    "route",
    "taxi",
    "train",
    "flight",
    "airport",
    "bus",
];

pub(crate) const REACH_HI: &[&str] = &[
    "कैसे पहुँच",
    "कैसे पहुंच",
    "कैसे जाएं",
    "कैसे जाऊं",
    "रास्ता",
    "टैक्सी",
    "ट्रेन",
];

pub(crate) const REACH_BN: &[&str] = &[
    "কিভাবে যাব",
    "কীভাবে যাব",
    "পৌঁছা",
    "পৌঁছানো",
    "রাস্তা",
    "ট্যাক্সি",
    "ট্রেন",
];

pub(crate) const REACH_UR: &[&str] = &["کیسے پہنچ", "کیسے جاؤں", "راستہ", "ٹیکسی", "ٹرین"];

pub(crate) const REACH_OR: &[&str] = &["କିପରି ଯିବି", "ପହଞ୍ଚ", "ରାସ୍ତା", "ଟ୍ୟାକ୍ସି", "ଟ୍ରେନ"];

// --- Handicrafts / shopping ---

pub(crate) const HANDICRAFTS_EN: &[&str] = &[
    "handicraft",
    "craft",
    "souvenir",
    "shopping",
    "buy",
    "dokra",
    "bamboo",
];

pub(crate) const HANDICRAFTS_HI: &[&str] = &["हस्तशिल्प", "खरीद", "बाज़ार", "बाजार", "डोकरा"];

pub(crate) const HANDICRAFTS_BN: &[&str] = &["হস্তশিল্প", "কিনতে", "বাজার", "ডোকরা"];

pub(crate) const HANDICRAFTS_UR: &[&str] = &["دستکاری", "خرید", "بازار"];

pub(crate) const HANDICRAFTS_OR: &[&str] = &["ହସ୍ତଶିଳ୍ପ", "କିଣି", "ବଜାର", "ଡୋକ୍ରା"];

// --- Festivals ---

pub(crate) const FESTIVALS_EN: &[&str] = &[
    "festival",
    "celebrat",
    "sarhul",
    "karma",
    "sohrai",
    "tusu",
];

pub(crate) const FESTIVALS_HI: &[&str] = &[
    "त्योहार",
    "त्यौहार",
    "उत्सव",
    "सरहुल",
    "करमा",
    "सोहराय",
];

pub(crate) const FESTIVALS_BN: &[&str] = &["উৎসব", "উত্সব", "পরব", "পার্বণ", "সরহুল", "করম"];

pub(crate) const FESTIVALS_SAT: &[&str] = &["ᱯᱟᱨᱚᱵ", "ᱥᱚᱦᱨᱟᱭ", "ᱵᱟᱦᱟ"];

pub(crate) const FESTIVALS_UR: &[&str] = &["تہوار", "میلہ", "جشن"];

pub(crate) const FESTIVALS_OR: &[&str] = &["ଉତ୍ସବ", "ସରହୁଲ", "କରମା"];

// --- Itinerary ---

pub(crate) const ITINERARY_EN: &[&str] = &[
    "itinerary",
    "plan a",
    "plan my",
    "day plan",
    "-day",
    "day trip",
    "schedule",
];

pub(crate) const ITINERARY_HI: &[&str] = &["यात्रा योजना", "कार्यक्रम", "दिन की यात्रा", "प्लान"];

pub(crate) const ITINERARY_BN: &[&str] = &["ভ্রমণ পরিকল্পনা", "পরিকল্পনা", "দিনের সফর"];

pub(crate) const ITINERARY_UR: &[&str] = &["سفر کا منصوبہ", "منصوبہ", "پروگرام"];

pub(crate) const ITINERARY_OR: &[&str] = &["ଯାତ୍ରା ଯୋଜନା", "ଯୋଜନା"];

// --- Culture ---

pub(crate) const CULTURE_EN: &[&str] = &[
    "culture",
    "cultural",
    "tribe",
    "tribal",
    "tradition",
    "folk",
    "dance",
    "santhal",
    "munda",
    "oraon",
];

pub(crate) const CULTURE_HI: &[&str] = &["संस्कृति", "आदिवासी", "जनजाति", "नृत्य", "परंपरा"];

pub(crate) const CULTURE_BN: &[&str] = &["সংস্কৃতি", "আদিবাসী", "উপজাতি", "নাচ", "ঐতিহ্য"];

pub(crate) const CULTURE_UR: &[&str] = &["ثقافت", "قبائلی", "رقص", "روایت"];

pub(crate) const CULTURE_OR: &[&str] = &["ସଂସ୍କୃତି", "ଆଦିବାସୀ", "ନୃତ୍ୟ", "ପରମ୍ପରା"];

// --- Places ---

pub(crate) const PLACES_EN: &[&str] = &[
    "place",
    "visit",
    "destination",
    "sightseeing",
    "tourist",
    "attraction",
    "netarhat",
    "betla",
    "hundru",
    "jonha",
    "waterfall",
    "falls",
];

pub(crate) const PLACES_HI: &[&str] = &["घूमने", "जगह", "स्थान", "पर्यटन", "नेतरहाट", "झरना", "बेतला"];

pub(crate) const PLACES_BN: &[&str] = &["ঘুরতে", "জায়গা", "দর্শনীয়", "নেতারহাট", "জলপ্রপাত"];

pub(crate) const PLACES_UR: &[&str] = &["سیر", "جگہ", "مقامات", "نیترہاٹ", "آبشار"];

pub(crate) const PLACES_OR: &[&str] = &["ବୁଲିବା", "ସ୍ଥାନ", "ଦର୍ଶନୀୟ", "ନେତରହାଟ", "ଜଳପ୍ରପାତ"];
