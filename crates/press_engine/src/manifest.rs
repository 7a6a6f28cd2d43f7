use chrono::NaiveDate;
use serde::Serialize;
use serde_json::Value;

use press_logging::press_warn;

/// Press-kit metadata: copy, downloadable assets and the photography
/// index. Drives marketing chrome only, so normalization never fails.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PressManifest {
    pub version: u32,
    pub updated_at: NaiveDate,
    pub contact_email: String,
    pub downloads: Downloads,
    pub copy: ManifestCopy,
    pub media: Vec<MediaEntry>,
}

/// Site-root-relative paths to the downloadable press assets. Passed
/// through to the rendering layer verbatim, never interpreted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Downloads {
    pub full_kit: String,
    pub logos: String,
    pub photos: String,
    pub factsheet: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ManifestCopy {
    pub es: PressCopy,
    pub en: PressCopy,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PressCopy {
    pub headline: String,
    pub subhead: String,
    pub usage_title: String,
    pub usage_body: String,
    pub boilerplate_30: String,
    pub boilerplate_80: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Localized {
    pub es: String,
    pub en: String,
}

/// One entry in the press photography index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MediaEntry {
    pub id: String,
    pub category: String,
    pub title: Localized,
    pub web: String,
    pub hires: Option<String>,
    pub credit: Option<String>,
    pub caption: Option<Localized>,
}

impl Default for PressManifest {
    fn default() -> Self {
        Self {
            version: 1,
            updated_at: NaiveDate::default(),
            contact_email: "press@olivea.mx".to_string(),
            downloads: Downloads::default(),
            copy: ManifestCopy::default(),
            media: Vec::new(),
        }
    }
}

impl Default for Downloads {
    fn default() -> Self {
        Self {
            full_kit: "/press/olivea-press-kit.zip".to_string(),
            logos: "/press/olivea-logos.zip".to_string(),
            photos: "/press/olivea-photos.zip".to_string(),
            factsheet: "/press/olivea-factsheet.pdf".to_string(),
        }
    }
}

impl Default for ManifestCopy {
    fn default() -> Self {
        Self {
            es: PressCopy {
                headline: "Olivea para prensa".to_string(),
                subhead: "Hotel, restaurante y café en el Valle de Guadalupe".to_string(),
                usage_title: "Uso de marca".to_string(),
                usage_body: "Materiales disponibles para uso editorial.".to_string(),
                boilerplate_30: "Olivea: hospitalidad de campo en Baja California.".to_string(),
                boilerplate_80: "Olivea reúne hotel, restaurante y café alrededor de una \
                                 huerta propia en el Valle de Guadalupe, Baja California."
                    .to_string(),
            },
            en: PressCopy {
                headline: "Olivea for press".to_string(),
                subhead: "Hotel, restaurant and café in Valle de Guadalupe".to_string(),
                usage_title: "Brand usage".to_string(),
                usage_body: "Materials are available for editorial use.".to_string(),
                boilerplate_30: "Olivea: garden-led hospitality in Baja California.".to_string(),
                boilerplate_80: "Olivea gathers a hotel, a restaurant and a café around its \
                                 own garden in Valle de Guadalupe, Baja California."
                    .to_string(),
            },
        }
    }
}

/// Normalizes an arbitrary JSON value into a fully-populated manifest.
///
/// Total by design: every field independently falls back to its default
/// when absent or of the wrong shape, and invalid media entries are
/// dropped one by one instead of aborting the whole manifest.
pub fn normalize_manifest(value: &Value) -> PressManifest {
    let defaults = PressManifest::default();
    let Some(root) = value.as_object() else {
        return defaults;
    };

    let version = root
        .get("version")
        .and_then(Value::as_u64)
        .and_then(|version| u32::try_from(version).ok())
        .unwrap_or(defaults.version);

    let updated_at = root
        .get("updatedAt")
        .and_then(Value::as_str)
        .and_then(|raw| NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok())
        .unwrap_or(defaults.updated_at);

    let contact_email = root
        .get("contactEmail")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|email| email.contains('@'))
        .map(ToOwned::to_owned)
        .unwrap_or(defaults.contact_email);

    let downloads = normalize_downloads(root.get("downloads"), defaults.downloads);
    let copy = ManifestCopy {
        es: normalize_copy(lookup(root.get("copy"), "es"), defaults.copy.es),
        en: normalize_copy(lookup(root.get("copy"), "en"), defaults.copy.en),
    };
    let media = normalize_media(root.get("media"));

    PressManifest {
        version,
        updated_at,
        contact_email,
        downloads,
        copy,
        media,
    }
}

fn normalize_downloads(value: Option<&Value>, defaults: Downloads) -> Downloads {
    Downloads {
        full_kit: site_path(lookup(value, "fullKit")).unwrap_or(defaults.full_kit),
        logos: site_path(lookup(value, "logos")).unwrap_or(defaults.logos),
        photos: site_path(lookup(value, "photos")).unwrap_or(defaults.photos),
        factsheet: site_path(lookup(value, "factsheet")).unwrap_or(defaults.factsheet),
    }
}

fn normalize_copy(value: Option<&Value>, defaults: PressCopy) -> PressCopy {
    PressCopy {
        headline: text(lookup(value, "headline")).unwrap_or(defaults.headline),
        subhead: text(lookup(value, "subhead")).unwrap_or(defaults.subhead),
        usage_title: text(lookup(value, "usageTitle")).unwrap_or(defaults.usage_title),
        usage_body: text(lookup(value, "usageBody")).unwrap_or(defaults.usage_body),
        boilerplate_30: text(lookup(value, "boilerplate30")).unwrap_or(defaults.boilerplate_30),
        boilerplate_80: text(lookup(value, "boilerplate80")).unwrap_or(defaults.boilerplate_80),
    }
}

fn normalize_media(value: Option<&Value>) -> Vec<MediaEntry> {
    let Some(entries) = value.and_then(Value::as_array) else {
        return Vec::new();
    };
    entries
        .iter()
        .filter_map(|entry| {
            let media = normalize_media_entry(entry);
            if media.is_none() {
                press_warn!("dropping invalid media entry: {entry}");
            }
            media
        })
        .collect()
}

fn normalize_media_entry(entry: &Value) -> Option<MediaEntry> {
    let id = text(entry.get("id"))?;
    let web = site_path(entry.get("web"))?;
    Some(MediaEntry {
        id,
        category: text(entry.get("category")).unwrap_or_else(|| "general".to_string()),
        title: localized(entry.get("title")),
        web,
        hires: site_path(entry.get("hires")),
        credit: text(entry.get("credit")),
        caption: caption_of(entry.get("caption")),
    })
}

fn caption_of(value: Option<&Value>) -> Option<Localized> {
    let has_text = text(lookup(value, "es")).is_some() || text(lookup(value, "en")).is_some();
    has_text.then(|| localized(value))
}

fn localized(value: Option<&Value>) -> Localized {
    let es = text(lookup(value, "es"));
    let en = text(lookup(value, "en"));
    // A one-language title still renders; mirror it into the gap.
    let fallback = es.clone().or_else(|| en.clone()).unwrap_or_default();
    Localized {
        es: es.unwrap_or_else(|| fallback.clone()),
        en: en.unwrap_or(fallback),
    }
}

fn lookup<'v>(value: Option<&'v Value>, key: &str) -> Option<&'v Value> {
    value.and_then(|value| value.get(key))
}

fn text(value: Option<&Value>) -> Option<String> {
    value
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map(ToOwned::to_owned)
}

/// Paths must be site-root-relative; anything else is rejected.
fn site_path(value: Option<&Value>) -> Option<String> {
    text(value).filter(|path| path.starts_with('/'))
}
