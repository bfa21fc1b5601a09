//! Built-in ophthalmology vocabulary.
//!
//! Each table is `(key, canonical value)` in display order. Canonical values are
//! Uzbek (Latin script); other locales are resolved through bundles keyed by
//! the same option keys.

use super::{Category, VocabularyEntry};

const GLOBE: &[(&str, &str)] = &[
    ("normal", "normada"),
    ("subatrophy", "subatrofiya"),
    ("atrophy", "atrofiya"),
    ("microphthalmos", "mikroftalm"),
    ("hydrophthalmos", "gidroftalm"),
    ("buphthalmos", "buftalm"),
];

const MUSCLES: &[(&str, &str)] = &[
    ("full_motility", "harakatlar to'liq hajmda"),
    ("limited_motility", "harakatlar cheklangan"),
    ("convergent_strabismus", "yaqinlashuvchi g'ilaylik"),
    ("divergent_strabismus", "uzoqlashuvchi g'ilaylik"),
    ("vertical_strabismus", "vertikal g'ilaylik"),
    ("nystagmus", "nistagm"),
    ("paresis", "parez"),
];

const LIDS_LACRIMAL: &[(&str, &str)] = &[
    ("normal", "o'zgarishsiz"),
    ("ptosis", "ptoz"),
    ("entropion", "entropion"),
    ("ectropion", "ektropion"),
    ("blepharitis", "blefarit"),
    ("chalazion", "xalyazion"),
    ("hordeolum", "arpacha"),
    ("dacryocystitis", "dakriotsistit"),
    ("lacrimal_obstruction", "ko'z yosh yo'li tiqilishi"),
];

const CONJUNCTIVA: &[(&str, &str)] = &[
    ("pale_pink", "och pushti"),
    ("hyperemic", "giperemiyalangan"),
    ("mixed_injection", "aralash in'eksiya"),
    ("pericorneal_injection", "perikorneal in'eksiya"),
    ("follicles", "follikulalar"),
    ("pterygium", "pterigiy"),
    ("pinguecula", "pingvekula"),
    ("chemosis", "xemoz"),
];

const SCLERA: &[(&str, &str)] = &[
    ("white", "oq"),
    ("icteric", "sarg'aygan"),
    ("bluish", "ko'kimtir"),
    ("episcleritis", "episklerit"),
    ("scleritis", "sklerit"),
    ("staphyloma", "stafiloma"),
];

const CORNEA: &[(&str, &str)] = &[
    ("clear", "tiniq"),
    ("opacity", "xiralashgan"),
    ("edema", "shishgan"),
    ("infiltrate", "infiltrat"),
    ("ulcer", "yara"),
    ("scar", "chandiq"),
    ("keratoconus", "keratokonus"),
    ("neovascularization", "neovaskulyarizatsiya"),
    ("foreign_body", "yot jism"),
];

const ANTERIOR_CHAMBER: &[(&str, &str)] = &[
    ("medium_depth", "o'rta chuqurlikda"),
    ("shallow", "sayoz"),
    ("deep", "chuqur"),
    ("uneven", "notekis"),
    ("hyphema", "gifema"),
    ("hypopyon", "gipopion"),
    ("turbid", "namligi loyqa"),
];

const IRIS_PUPIL: &[(&str, &str)] = &[
    ("normal", "o'zgarishsiz"),
    ("rubeosis", "rubeoz"),
    ("atrophy", "atrofiya"),
    ("posterior_synechiae", "orqa sinexiyalar"),
    ("mydriasis", "midriaz"),
    ("miosis", "mioz"),
    ("coloboma", "koloboma"),
    ("aniridia", "aniridiya"),
];

const LENS: &[(&str, &str)] = &[
    ("clear", "tiniq"),
    ("initial_cataract", "boshlang'ich katarakta"),
    ("immature_cataract", "yetilmagan katarakta"),
    ("mature_cataract", "yetilgan katarakta"),
    ("pseudophakia", "artifakiya"),
    ("aphakia", "afakiya"),
    ("subluxation", "gavhar chiqishi"),
];

const VITREOUS: &[(&str, &str)] = &[
    ("clear", "tiniq"),
    ("floaters", "suzuvchi xiraliklar"),
    ("destruction", "destruksiya"),
    ("hemophthalmos", "gemoftalm"),
    ("posterior_detachment", "orqa ajralish"),
];

const FUNDUS: &[(&str, &str)] = &[
    ("normal", "normada"),
    ("diabetic_retinopathy", "diabetik retinopatiya"),
    ("hypertensive_angiopathy", "gipertonik angiopatiya"),
    ("macular_degeneration", "makula degeneratsiyasi"),
    ("optic_atrophy", "ko'ruv nervi atrofiyasi"),
    ("glaucomatous_cupping", "glaukomatoz ekskavatsiya"),
    ("retinal_detachment", "to'r parda ko'chishi"),
    ("not_visible", "ko'rinmaydi"),
];

const DIAGNOSIS: &[(&str, &str)] = &[
    ("myopia", "miopiya"),
    ("hyperopia", "gipermetropiya"),
    ("astigmatism", "astigmatizm"),
    ("presbyopia", "presbiopiya"),
    ("cataract", "katarakta"),
    ("open_angle_glaucoma", "ochiq burchakli glaukoma"),
    ("angle_closure_glaucoma", "yopiq burchakli glaukoma"),
    ("conjunctivitis", "kon'yunktivit"),
    ("keratitis", "keratit"),
    ("uveitis", "uveit"),
    ("diabetic_retinopathy", "diabetik retinopatiya"),
    ("macular_degeneration", "yoshga bog'liq makula degeneratsiyasi"),
    ("dry_eye", "quruq ko'z sindromi"),
    ("strabismus", "g'ilaylik"),
    ("amblyopia", "ambliopiya"),
    ("healthy", "sog'lom"),
];

const RECOMMENDATIONS: &[(&str, &str)] = &[
    ("glasses", "ko'zoynak"),
    ("contact_lenses", "kontakt linzalar"),
    ("eye_drops", "ko'z tomchilari"),
    ("follow_up", "qayta ko'rik"),
    ("surgery", "jarrohlik amaliyoti"),
    ("laser", "lazer davolash"),
    ("endocrinologist", "endokrinolog maslahati"),
    ("neurologist", "nevrolog maslahati"),
    ("visual_hygiene", "ko'rish gigiyenasi"),
];

const COMPLAINTS: &[(&str, &str)] = &[
    ("decreased_vision", "ko'rishning pasayishi"),
    ("redness", "qizarish"),
    ("pain", "og'riq"),
    ("itching", "qichishish"),
    ("tearing", "ko'z yoshlanishi"),
    ("photophobia", "yorug'likdan qo'rqish"),
    ("foreign_body_sensation", "yot jism hissi"),
    ("double_vision", "ikkilanib ko'rish"),
    ("floaters", "ko'z oldida pashshalar"),
    ("headache", "bosh og'rig'i"),
];

const COMORBIDITIES: &[(&str, &str)] = &[
    ("none", "yo'q"),
    ("diabetes", "qandli diabet"),
    ("hypertension", "arterial gipertenziya"),
    ("ischemic_heart_disease", "yurak ishemik kasalligi"),
    ("thyroid_disease", "qalqonsimon bez kasalligi"),
    ("allergy", "allergiya"),
    ("rheumatoid_arthritis", "revmatoid artrit"),
];

const CITIES: &[(&str, &str)] = &[
    ("tashkent", "Toshkent"),
    ("samarkand", "Samarqand"),
    ("bukhara", "Buxoro"),
    ("andijan", "Andijon"),
    ("fergana", "Farg'ona"),
    ("namangan", "Namangan"),
    ("nukus", "Nukus"),
    ("karshi", "Qarshi"),
    ("termez", "Termiz"),
    ("urgench", "Urganch"),
    ("jizzakh", "Jizzax"),
    ("gulistan", "Guliston"),
    ("navoi", "Navoiy"),
];

const GENDER: &[(&str, &str)] = &[
    ("male", "erkak"),
    ("female", "ayol"),
];

const IOP_METHODS: &[(&str, &str)] = &[
    ("maklakov", "Maklakov bo'yicha"),
    ("non_contact", "kontaktsiz tonometriya"),
    ("goldmann", "Goldman bo'yicha"),
    ("rebound", "rebaund tonometriya"),
    ("palpation", "palpator"),
];

/// Entries for every registered category, in registry order.
pub(crate) fn builtin_entries() -> Vec<VocabularyEntry> {
    vec![
        VocabularyEntry::from_table(Category::Globe, GLOBE, Some("normal")),
        VocabularyEntry::from_table(Category::Muscles, MUSCLES, Some("full_motility")),
        VocabularyEntry::from_table(Category::LidsLacrimal, LIDS_LACRIMAL, Some("normal")),
        VocabularyEntry::from_table(Category::Conjunctiva, CONJUNCTIVA, Some("pale_pink")),
        VocabularyEntry::from_table(Category::Sclera, SCLERA, Some("white")),
        VocabularyEntry::from_table(Category::Cornea, CORNEA, Some("clear")),
        VocabularyEntry::from_table(Category::AnteriorChamber, ANTERIOR_CHAMBER, Some("medium_depth")),
        VocabularyEntry::from_table(Category::IrisPupil, IRIS_PUPIL, Some("normal")),
        VocabularyEntry::from_table(Category::Lens, LENS, Some("clear")),
        VocabularyEntry::from_table(Category::Vitreous, VITREOUS, Some("clear")),
        VocabularyEntry::from_table(Category::Fundus, FUNDUS, Some("normal")),
        VocabularyEntry::from_table(Category::Diagnosis, DIAGNOSIS, None),
        VocabularyEntry::from_table(Category::Recommendations, RECOMMENDATIONS, None),
        VocabularyEntry::from_table(Category::Complaints, COMPLAINTS, None),
        VocabularyEntry::from_table(Category::Comorbidities, COMORBIDITIES, Some("none")),
        VocabularyEntry::from_table(Category::Cities, CITIES, None),
        VocabularyEntry::from_table(Category::Gender, GENDER, None),
        VocabularyEntry::from_table(Category::IopMethods, IOP_METHODS, None),
    ]
}
