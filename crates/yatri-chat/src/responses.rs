//! Canned, pre-translated assistant responses.
//!
//! The built-in table is static data. English is the default language and
//! must be present for every topic, the generic fallback and the welcome
//! message; [`ResponseTable::validate`] enforces that at startup.

use std::collections::HashMap;
use std::sync::LazyLock;

use tracing::error;
use yatri_core::error::YatriError;
use yatri_core::language::Language;

use crate::topics::Topic;

/// Returned only if a table was built without passing validation.
const LAST_RESORT: &str = "Sorry, I can't answer that right now.";

pub type Translations = &'static [(Language, &'static str)];

const PLACES: Translations = &[
    (
        Language::English,
        "Jharkhand offers incredible destinations like Netarhat (Queen of Chotanagpur), \
         Betla National Park for wildlife, Hundru Falls, Jonha Falls, and the beautiful \
         tribal villages around Khunti. Each place has its unique charm and cultural significance.",
    ),
    (
        Language::Hindi,
        "झारखंड में नेतरहाट (छोटानागपुर की रानी), वन्यजीवों के लिए बेतला राष्ट्रीय उद्यान, \
         हुंडरू जलप्रपात, जोन्हा जलप्रपात और खूंटी के आसपास के सुंदर आदिवासी गाँव जैसे \
         अद्भुत स्थल हैं। हर जगह का अपना अनोखा आकर्षण और सांस्कृतिक महत्व है।",
    ),
    (
        Language::Bengali,
        "ঝাড়খণ্ডে রয়েছে নেতারহাট (ছোটনাগপুরের রানি), বন্যপ্রাণীর জন্য বেতলা জাতীয় উদ্যান, \
         হুন্ড্রু জলপ্রপাত, জোনহা জলপ্রপাত এবং খুঁটির আশেপাশের সুন্দর আদিবাসী গ্রাম। \
         প্রতিটি জায়গার নিজস্ব আকর্ষণ ও সাংস্কৃতিক গুরুত্ব আছে।",
    ),
    (
        Language::Urdu,
        "جھارکھنڈ میں نیترہاٹ (چھوٹا ناگپور کی ملکہ)، جنگلی حیات کے لیے بیتلا نیشنل پارک، \
         ہنڈرو آبشار، جونہا آبشار اور کھونٹی کے آس پاس کے خوبصورت قبائلی گاؤں جیسے \
         شاندار مقامات ہیں۔",
    ),
    (
        Language::Odia,
        "ଝାଡ଼ଖଣ୍ଡରେ ନେତରହାଟ, ବେତଲା ଜାତୀୟ ଉଦ୍ୟାନ, ହୁଣ୍ଡ୍ରୁ ଜଳପ୍ରପାତ, ଜୋନ୍ହା ଜଳପ୍ରପାତ ଏବଂ \
         ଖୁଣ୍ଟି ନିକଟରେ ସୁନ୍ଦର ଆଦିବାସୀ ଗାଁ ଭଳି ଚମତ୍କାର ସ୍ଥାନ ଅଛି।",
    ),
];

const REACH: Translations = &[
    (
        Language::English,
        "From Ranchi to Netarhat, you can take a bus (4-5 hours) or hire a taxi (3 hours). \
         The route goes through Kanke-Khiju-Daltonganj road. I recommend starting early \
         morning to catch the famous Netarhat sunrise!",
    ),
    (
        Language::Hindi,
        "रांची से नेतरहाट के लिए आप बस (4-5 घंटे) ले सकते हैं या टैक्सी (3 घंटे) किराए पर ले \
         सकते हैं। रास्ता कांके-खिजू-डालटनगंज रोड से होकर जाता है। नेतरहाट का प्रसिद्ध \
         सूर्योदय देखने के लिए सुबह जल्दी निकलें!",
    ),
    (
        Language::Bengali,
        "রাঁচি থেকে নেতারহাট যেতে বাস (৪-৫ ঘণ্টা) বা ট্যাক্সি (৩ ঘণ্টা) নিতে পারেন। \
         রাস্তাটি কাঁকে-খিজু-ডালটনগঞ্জ রোড হয়ে যায়। নেতারহাটের বিখ্যাত সূর্যোদয় দেখতে \
         ভোরে রওনা দিন!",
    ),
    (
        Language::Urdu,
        "رانچی سے نیترہاٹ کے لیے آپ بس (4-5 گھنٹے) لے سکتے ہیں یا ٹیکسی (3 گھنٹے) کرائے پر \
         لے سکتے ہیں۔ نیترہاٹ کا مشہور طلوعِ آفتاب دیکھنے کے لیے صبح سویرے روانہ ہوں!",
    ),
];

const CULTURE: Translations = &[
    (
        Language::English,
        "Jharkhand's tribal culture is incredibly rich! The major tribes include Santhal, \
         Munda, Ho, and Oraon. They have unique traditions, folk dances like Jhumar and \
         Domkach, beautiful handicrafts, and festivals like Sarhul and Karma. You can visit \
         tribal museums in Ranchi to learn more.",
    ),
    (
        Language::Hindi,
        "झारखंड की आदिवासी संस्कृति बेहद समृद्ध है! प्रमुख जनजातियों में संथाल, मुंडा, हो और \
         उरांव शामिल हैं। झूमर और डोमकच जैसे लोक नृत्य, सुंदर हस्तशिल्प और सरहुल व करमा \
         जैसे त्योहार इनकी पहचान हैं। अधिक जानने के लिए रांची के आदिवासी संग्रहालय जाएँ।",
    ),
    (
        Language::Bengali,
        "ঝাড়খণ্ডের আদিবাসী সংস্কৃতি অত্যন্ত সমৃদ্ধ! প্রধান জনগোষ্ঠী হল সাঁওতাল, মুন্ডা, হো \
         এবং ওরাওঁ। ঝুমর ও ডমকচের মতো লোকনৃত্য, সুন্দর হস্তশিল্প এবং সরহুল ও করমের মতো \
         উৎসব তাদের ঐতিহ্য। আরও জানতে রাঁচির আদিবাসী সংগ্রহশালায় যান।",
    ),
    (
        Language::Urdu,
        "جھارکھنڈ کی قبائلی ثقافت بہت مالا مال ہے! بڑے قبائل میں سنتھال، منڈا، ہو اور اوراؤں \
         شامل ہیں۔ جھومر اور ڈومکچ جیسے لوک رقص اور سرہل و کرما جیسے تہوار ان کی پہچان ہیں۔",
    ),
];

const FESTIVALS: Translations = &[
    (
        Language::English,
        "Major festivals include Sarhul (spring festival), Karma (harvest festival), Sohrai \
         (harvest festival), and Tusu (winter festival). These celebrations feature \
         traditional music, dance, and community gatherings that showcase the vibrant \
         tribal culture.",
    ),
    (
        Language::Hindi,
        "प्रमुख त्योहारों में सरहुल (वसंत उत्सव), करमा (फसल उत्सव), सोहराय (फसल उत्सव) और \
         टुसू (शीत उत्सव) शामिल हैं। इन उत्सवों में पारंपरिक संगीत, नृत्य और सामुदायिक \
         मेलजोल जीवंत आदिवासी संस्कृति को दर्शाते हैं।",
    ),
    (
        Language::Bengali,
        "প্রধান উৎসবগুলি হল সরহুল (বসন্ত উৎসব), করম (ফসলের উৎসব), সোহরাই (ফসলের উৎসব) \
         এবং টুসু (শীতের উৎসব)। এই উৎসবগুলিতে ঐতিহ্যবাহী গান, নাচ ও সামাজিক মিলন \
         প্রাণবন্ত আদিবাসী সংস্কৃতিকে তুলে ধরে।",
    ),
    (
        Language::Urdu,
        "بڑے تہواروں میں سرہل (بہار کا تہوار)، کرما (فصل کا تہوار)، سوہرائی (فصل کا تہوار) \
         اور ٹوسو (سردیوں کا تہوار) شامل ہیں۔",
    ),
    (
        Language::Odia,
        "ପ୍ରମୁଖ ପର୍ବ ମଧ୍ୟରେ ସରହୁଲ (ବସନ୍ତ ଉତ୍ସବ), କରମା (ଫସଲ ଉତ୍ସବ), ସୋହରାଇ (ଫସଲ ଉତ୍ସବ) \
         ଏବଂ ଟୁସୁ (ଶୀତ ଉତ୍ସବ) ଅନ୍ତର୍ଭୁକ୍ତ।",
    ),
];

const ITINERARY: Translations = &[
    (
        Language::English,
        "Here's a perfect 3-day plan:\n\
         Day 1: Ranchi city tour - Tribal Museum, Tagore Hill, local markets\n\
         Day 2: Netarhat - sunrise point, tribal village visit\n\
         Day 3: Betla National Park - wildlife safari, Palamau Fort\n\
         Would you like detailed timings and activities?",
    ),
    (
        Language::Hindi,
        "यह रही 3 दिन की एक बढ़िया योजना:\n\
         दिन 1: रांची शहर भ्रमण - आदिवासी संग्रहालय, टैगोर हिल, स्थानीय बाज़ार\n\
         दिन 2: नेतरहाट - सनराइज़ पॉइंट, आदिवासी गाँव भ्रमण\n\
         दिन 3: बेतला राष्ट्रीय उद्यान - वन्यजीव सफ़ारी, पलामू किला\n\
         क्या आप विस्तृत समय और गतिविधियाँ जानना चाहेंगे?",
    ),
    (
        Language::Bengali,
        "এখানে ৩ দিনের একটি চমৎকার পরিকল্পনা:\n\
         দিন ১: রাঁচি শহর ভ্রমণ - আদিবাসী সংগ্রহশালা, টেগোর হিল, স্থানীয় বাজার\n\
         দিন ২: নেতারহাট - সূর্যোদয় পয়েন্ট, আদিবাসী গ্রাম ভ্রমণ\n\
         দিন ৩: বেতলা জাতীয় উদ্যান - বন্যপ্রাণী সাফারি, পালামৌ দুর্গ\n\
         বিস্তারিত সময়সূচি জানতে চান?",
    ),
];

const HANDICRAFTS: Translations = &[
    (
        Language::English,
        "For authentic tribal handicrafts, visit:\n\
         \u{2022} Main Road Market in Ranchi\n\
         \u{2022} Tribal Research Institute showroom\n\
         \u{2022} Khadi Gramodyog Bhavan\n\
         \u{2022} Local tribal villages near Khunti\n\
         Look for bamboo crafts, dokra art, handwoven textiles, and traditional jewelry.",
    ),
    (
        Language::Hindi,
        "असली आदिवासी हस्तशिल्प के लिए जाएँ:\n\
         \u{2022} रांची का मेन रोड बाज़ार\n\
         \u{2022} जनजातीय शोध संस्थान शोरूम\n\
         \u{2022} खादी ग्रामोद्योग भवन\n\
         \u{2022} खूंटी के पास के आदिवासी गाँव\n\
         बाँस शिल्प, डोकरा कला, हथकरघा वस्त्र और पारंपरिक आभूषण देखें।",
    ),
    (
        Language::Bengali,
        "খাঁটি আদিবাসী হস্তশিল্পের জন্য যান:\n\
         \u{2022} রাঁচির মেন রোড বাজার\n\
         \u{2022} ট্রাইবাল রিসার্চ ইনস্টিটিউট শোরুম\n\
         \u{2022} খাদি গ্রামোদ্যোগ ভবন\n\
         \u{2022} খুঁটির কাছের আদিবাসী গ্রাম\n\
         বাঁশের কারুকাজ, ডোকরা শিল্প, হাতে বোনা কাপড় ও ঐতিহ্যবাহী গয়না খুঁজুন।",
    ),
];

const FALLBACK: Translations = &[
    (
        Language::English,
        "Thank you for your question! I'd be happy to help you explore Jharkhand. Could you \
         please be more specific about what you'd like to know? I can help with \
         destinations, cultural experiences, transport, accommodation, or any other \
         travel-related queries.",
    ),
    (
        Language::Hindi,
        "आपके प्रश्न के लिए धन्यवाद! मुझे झारखंड घूमने में आपकी मदद करके खुशी होगी। कृपया \
         थोड़ा स्पष्ट बताएँ कि आप क्या जानना चाहते हैं? मैं पर्यटन स्थलों, सांस्कृतिक अनुभवों, \
         परिवहन, आवास या यात्रा से जुड़े किसी भी प्रश्न में मदद कर सकता हूँ।",
    ),
    (
        Language::Bengali,
        "আপনার প্রশ্নের জন্য ধন্যবাদ! ঝাড়খণ্ড ঘুরে দেখতে আপনাকে সাহায্য করতে পেরে খুশি হব। \
         আপনি ঠিক কী জানতে চান একটু স্পষ্ট করে বলবেন? দর্শনীয় স্থান, সংস্কৃতি, যাতায়াত, \
         থাকার ব্যবস্থা বা ভ্রমণ সংক্রান্ত যেকোনো প্রশ্নে সাহায্য করতে পারি।",
    ),
    (
        Language::Urdu,
        "آپ کے سوال کا شکریہ! جھارکھنڈ کی سیر میں آپ کی مدد کر کے مجھے خوشی ہوگی۔ براہِ کرم \
         بتائیں کہ آپ کیا جاننا چاہتے ہیں؟ میں مقامات، ثقافت، سفر، رہائش یا کسی بھی سفری \
         سوال میں مدد کر سکتا ہوں۔",
    ),
    (
        Language::Odia,
        "ଆପଣଙ୍କ ପ୍ରଶ୍ନ ପାଇଁ ଧନ୍ୟବାଦ! ଝାଡ଼ଖଣ୍ଡ ବୁଲିବାରେ ଆପଣଙ୍କୁ ସାହାଯ୍ୟ କରିବାକୁ ମୁଁ ଖୁସି। \
         ଦୟାକରି ଆପଣ କଣ ଜାଣିବାକୁ ଚାହାଁନ୍ତି ଟିକେ ସ୍ପଷ୍ଟ କରି କୁହନ୍ତୁ।",
    ),
];

const WELCOME: Translations = &[
    (
        Language::English,
        "Namaste! Welcome to Jharkhand Tourism AI Assistant. I can help you in multiple \
         languages including Hindi, Bengali, Santali, and English. How can I assist you today?",
    ),
    (
        Language::Hindi,
        "नमस्ते! झारखंड पर्यटन सहायक में आपका स्वागत है। मैं हिंदी, बंगाली, संथाली और अंग्रेज़ी \
         सहित कई भाषाओं में आपकी मदद कर सकता हूँ। आज मैं आपकी क्या सहायता करूँ?",
    ),
    (
        Language::Bengali,
        "নমস্কার! ঝাড়খণ্ড পর্যটন সহায়কে আপনাকে স্বাগত। আমি হিন্দি, বাংলা, সাঁওতালি ও \
         ইংরেজি সহ বিভিন্ন ভাষায় সাহায্য করতে পারি। আজ কীভাবে সাহায্য করতে পারি?",
    ),
    (
        Language::Santali,
        "ᱡᱚᱦᱟᱨ! Welcome to Jharkhand Tourism AI Assistant. How can I assist you today?",
    ),
];

/// Topic → language → canned text, plus the generic fallback and the
/// session welcome message.
#[derive(Debug, Clone, Default)]
pub struct ResponseTable {
    topics: HashMap<Topic, HashMap<Language, &'static str>>,
    fallback: HashMap<Language, &'static str>,
    welcome: HashMap<Language, &'static str>,
}

impl ResponseTable {
    /// Build a table without validating it.
    pub fn from_static(
        topics: &[(Topic, Translations)],
        fallback: Translations,
        welcome: Translations,
    ) -> Self {
        Self {
            topics: topics
                .iter()
                .map(|(topic, entries)| (*topic, entries.iter().copied().collect()))
                .collect(),
            fallback: fallback.iter().copied().collect(),
            welcome: welcome.iter().copied().collect(),
        }
    }

    /// Build and validate a table.
    pub fn new(
        topics: &[(Topic, Translations)],
        fallback: Translations,
        welcome: Translations,
    ) -> Result<Self, YatriError> {
        let table = Self::from_static(topics, fallback, welcome);
        table.validate()?;
        Ok(table)
    }

    /// Check that every topic, the fallback and the welcome message have a
    /// non-empty default-language entry.
    pub fn validate(&self) -> Result<(), YatriError> {
        let default = Language::default();
        for topic in Topic::ALL {
            let ok = self
                .topics
                .get(&topic)
                .and_then(|m| m.get(&default))
                .is_some_and(|s| !s.trim().is_empty());
            if !ok {
                return Err(YatriError::Data(format!(
                    "topic '{}' has no {} response",
                    topic.key(),
                    default.name()
                )));
            }
        }
        for (label, map) in [("fallback", &self.fallback), ("welcome", &self.welcome)] {
            if !map.get(&default).is_some_and(|s| !s.trim().is_empty()) {
                return Err(YatriError::Data(format!(
                    "{label} has no {} response",
                    default.name()
                )));
            }
        }
        Ok(())
    }

    /// Resolve the text to show for `topic` in `lang`.
    ///
    /// Untranslated entries fall back to the default language; a missing
    /// topic yields the generic fallback message. Never empty.
    pub fn resolve(&self, topic: Option<Topic>, lang: Language) -> &'static str {
        let map = match topic.and_then(|t| self.topics.get(&t)) {
            Some(map) => map,
            None => &self.fallback,
        };
        Self::localized(map, lang)
            .or_else(|| Self::localized(&self.fallback, lang))
            .unwrap_or(LAST_RESORT)
    }

    /// Welcome message in `lang`, or in the default language.
    pub fn welcome(&self, lang: Language) -> &'static str {
        Self::localized(&self.welcome, lang).unwrap_or(LAST_RESORT)
    }

    /// Whether `topic` has a dedicated translation in `lang`.
    pub fn is_translated(&self, topic: Topic, lang: Language) -> bool {
        self.topics
            .get(&topic)
            .is_some_and(|m| m.contains_key(&lang))
    }

    /// Entry for `lang`, else the default-language entry. Blank entries
    /// count as missing.
    fn localized(map: &HashMap<Language, &'static str>, lang: Language) -> Option<&'static str> {
        let usable = |l: Language| map.get(&l).copied().filter(|s| !s.trim().is_empty());
        usable(lang).or_else(|| usable(Language::default()))
    }
}

static BUILTIN: LazyLock<ResponseTable> = LazyLock::new(|| {
    let table = ResponseTable::from_static(
        &[
            (Topic::Reach, REACH),
            (Topic::Handicrafts, HANDICRAFTS),
            (Topic::Festivals, FESTIVALS),
            (Topic::Itinerary, ITINERARY),
            (Topic::Culture, CULTURE),
            (Topic::Places, PLACES),
        ],
        FALLBACK,
        WELCOME,
    );
    if let Err(e) = table.validate() {
        error!("built-in response table: {e}");
    }
    table
});

/// The built-in response table. Validated on first use; problems are
/// logged and lookups stay total. Use [`try_builtin`] to fail instead.
pub fn builtin() -> &'static ResponseTable {
    &BUILTIN
}

/// The built-in response table, or the validation error.
pub fn try_builtin() -> Result<&'static ResponseTable, YatriError> {
    let table = builtin();
    table.validate()?;
    Ok(table)
}

/// Resolve against the built-in table.
pub fn resolve(topic: Option<Topic>, lang: Language) -> &'static str {
    builtin().resolve(topic, lang)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_table_is_valid() {
        builtin().validate().unwrap();
    }

    #[test]
    fn test_fallback_non_empty_for_every_language() {
        for lang in Language::ALL {
            assert!(!resolve(None, lang).is_empty(), "{lang:?}");
            assert!(!builtin().welcome(lang).is_empty(), "{lang:?}");
        }
    }

    #[test]
    fn test_every_topic_resolves_for_every_language() {
        for topic in Topic::ALL {
            for lang in Language::ALL {
                assert!(!resolve(Some(topic), lang).is_empty(), "{topic:?}/{lang:?}");
            }
        }
    }

    #[test]
    fn test_translated_entry_used() {
        let text = resolve(Some(Topic::Festivals), Language::Bengali);
        assert!(text.contains("সরহুল"));
        assert!(builtin().is_translated(Topic::Festivals, Language::Bengali));
    }

    #[test]
    fn test_untranslated_topic_falls_back_to_english() {
        assert!(!builtin().is_translated(Topic::Itinerary, Language::Odia));
        assert_eq!(
            resolve(Some(Topic::Itinerary), Language::Odia),
            resolve(Some(Topic::Itinerary), Language::English)
        );
    }

    #[test]
    fn test_untranslated_fallback_uses_english() {
        assert_eq!(
            resolve(None, Language::Santali),
            resolve(None, Language::English)
        );
        assert!(resolve(None, Language::English).starts_with("Thank you for your question!"));
    }

    #[test]
    fn test_validate_rejects_missing_english_topic() {
        let hindi_only: Translations = &[(Language::Hindi, "नमस्ते")];
        let err = ResponseTable::new(
            &[
                (Topic::Reach, REACH),
                (Topic::Handicrafts, HANDICRAFTS),
                (Topic::Festivals, hindi_only),
                (Topic::Itinerary, ITINERARY),
                (Topic::Culture, CULTURE),
                (Topic::Places, PLACES),
            ],
            FALLBACK,
            WELCOME,
        )
        .unwrap_err();
        assert!(err.to_string().contains("festivals"));
    }

    #[test]
    fn test_validate_rejects_absent_topic() {
        let err = ResponseTable::new(&[(Topic::Reach, REACH)], FALLBACK, WELCOME).unwrap_err();
        assert!(matches!(err, YatriError::Data(_)));
    }

    #[test]
    fn test_validate_rejects_missing_fallback() {
        let err = ResponseTable::new(
            &[
                (Topic::Reach, REACH),
                (Topic::Handicrafts, HANDICRAFTS),
                (Topic::Festivals, FESTIVALS),
                (Topic::Itinerary, ITINERARY),
                (Topic::Culture, CULTURE),
                (Topic::Places, PLACES),
            ],
            &[],
            WELCOME,
        )
        .unwrap_err();
        assert!(err.to_string().contains("fallback"));
    }

    #[test]
    fn test_try_builtin_ok() {
        let table = try_builtin().unwrap();
        assert!(std::ptr::eq(table, builtin()));
    }

    #[test]
    fn test_blank_translation_uses_topic_english() {
        let places: Translations = &[(Language::English, "places-en"), (Language::Hindi, "")];
        let culture: Translations = &[(Language::English, "culture-en"), (Language::Hindi, "  ")];
        let table = ResponseTable::new(
            &[
                (Topic::Reach, REACH),
                (Topic::Handicrafts, HANDICRAFTS),
                (Topic::Festivals, FESTIVALS),
                (Topic::Itinerary, ITINERARY),
                (Topic::Culture, culture),
                (Topic::Places, places),
            ],
            FALLBACK,
            WELCOME,
        )
        .unwrap();
        assert_eq!(table.resolve(Some(Topic::Places), Language::Hindi), "places-en");
        assert_eq!(table.resolve(Some(Topic::Culture), Language::Hindi), "culture-en");
    }

    #[test]
    fn test_unvalidated_table_still_total() {
        let empty = ResponseTable::default();
        assert_eq!(empty.resolve(Some(Topic::Places), Language::Hindi), LAST_RESORT);
        assert_eq!(empty.resolve(None, Language::English), LAST_RESORT);
    }
}
