//! Schema declarations for every collection and singleton

use lazy_static::lazy_static;
use std::collections::HashMap;

use super::fields::{
    array, checkbox, date, file, image, markdoc, number, object, relationship, select, slug,
    text, url, FieldType, Schema,
};
use super::Kind;

pub const BLOG_STATUSES: &[&str] = &["draft", "published", "archived"];

pub const PROJECT_STATUSES: &[&str] = &[
    "planned",
    "ongoing",
    "completed",
    "draft",
    "archived",
    "on_hold",
    "cancelled",
];

pub const ACTIVITY_STATUSES: &[&str] = &["planned", "ongoing", "completed"];

pub const SOCIAL_PLATFORMS: &[&str] = &[
    "facebook",
    "twitter",
    "linkedin",
    "instagram",
    "telegram",
    "tiktok",
];

lazy_static! {
    static ref SCHEMAS: HashMap<Kind, Schema> = {
        let mut map = HashMap::new();
        for schema in [
            partners(),
            blogs(),
            authors(),
            services(),
            projects(),
            settings(),
            home(),
            about(),
        ] {
            map.insert(schema.kind, schema);
        }
        map
    };
}

/// Schema of a kind
pub fn schema_for(kind: Kind) -> &'static Schema {
    // Every kind is registered above.
    &SCHEMAS[&kind]
}

fn cta(name: &'static str) -> super::Field {
    object(name, vec![text("text"), text("href")])
}

fn icon_card() -> FieldType {
    FieldType::Object(vec![text("icon"), text("title"), text("description")])
}

fn partners() -> Schema {
    Schema::new(
        Kind::Partner,
        vec![
            slug("name"),
            text("legal_name"),
            text("short_description"),
            text("role"),
            text("scope"),
            url("website"),
            url("twitter"),
            url("facebook"),
            url("instagram"),
            url("linkedin"),
            image("logo"),
            image("cover_image"),
            text("country"),
            text("address"),
            checkbox("is_active", true),
        ],
    )
}

fn blogs() -> Schema {
    Schema::new(
        Kind::Blog,
        vec![
            slug("title"),
            text("excerpt"),
            select("status", BLOG_STATUSES, "draft"),
            date("date_created"),
            date("date_updated"),
            date("published_at"),
            relationship("author", Kind::Author),
            text("category"),
            array("tags", FieldType::Text),
            image("featured_image"),
            number("reading_time_minutes"),
            markdoc("content"),
            text("meta_title"),
            text("meta_description"),
        ],
    )
}

fn authors() -> Schema {
    Schema::new(
        Kind::Author,
        vec![slug("full_name"), text("bio"), image("avatar")],
    )
}

fn services() -> Schema {
    Schema::new(
        Kind::Program,
        vec![
            slug("title"),
            text("short_description"),
            markdoc("description"),
            image("cover_image"),
            image("icon"),
            text("beneficiaries"),
            markdoc("goals"),
            array(
                "gallery",
                FieldType::Object(vec![image("image"), text("caption")]),
            ),
            date("date_created"),
            date("date_updated"),
        ],
    )
}

fn projects() -> Schema {
    Schema::new(
        Kind::Project,
        vec![
            slug("title"),
            text("summary"),
            select("status", PROJECT_STATUSES, "draft"),
            checkbox("featured", false),
            text("location"),
            text("country").with_default("Rwanda"),
            text("region"),
            text("district"),
            date("start_date"),
            date("end_date"),
            text("executive_summary"),
            markdoc("background"),
            markdoc("objectives"),
            markdoc("methodology"),
            markdoc("key_findings"),
            markdoc("conclusions"),
            markdoc("recommendations"),
            array(
                "impact_metrics",
                FieldType::Object(vec![text("label"), number("value")]),
            ),
            array(
                "linked_partners",
                FieldType::Object(vec![
                    relationship("partner", Kind::Partner),
                    text("role"),
                ]),
            ),
            relationship("contact_person", Kind::Author),
            array(
                "activities",
                FieldType::Object(vec![
                    date("date"),
                    text("title"),
                    text("description"),
                    select("status", ACTIVITY_STATUSES, "planned"),
                ]),
            ),
            array(
                "timeline",
                FieldType::Object(vec![
                    date("from_date"),
                    date("to_date"),
                    text("label"),
                    text("description"),
                ]),
            ),
            image("hero_image"),
            array(
                "gallery",
                FieldType::Object(vec![image("image"), text("caption"), text("alt_text")]),
            ),
            array(
                "documents",
                FieldType::Object(vec![
                    text("name"),
                    file("file"),
                    url("url"),
                    text("type"),
                    number("size"),
                ]),
            ),
        ],
    )
}

fn settings() -> Schema {
    Schema::new(
        Kind::Settings,
        vec![
            text("siteName"),
            image("logo"),
            image("favicon"),
            object(
                "footer",
                vec![
                    text("organizationName"),
                    text("description"),
                    array("tags", FieldType::Text),
                    object(
                        "contact",
                        vec![text("address"), text("phone"), text("email"), text("whatsapp")],
                    ),
                    array(
                        "socialLinks",
                        FieldType::Object(vec![
                            select("platform", SOCIAL_PLATFORMS, "facebook"),
                            url("url"),
                        ]),
                    ),
                    text("copyright"),
                    text("tagline"),
                ],
            ),
            object(
                "seo",
                vec![
                    text("metaTitle"),
                    text("metaDescription"),
                    text("keywords"),
                    image("ogImage"),
                ],
            ),
        ],
    )
}

fn home() -> Schema {
    Schema::new(
        Kind::Home,
        vec![
            object(
                "hero",
                vec![
                    text("title"),
                    text("highlightedPhrase"),
                    text("subtitle"),
                    image("backgroundImage"),
                    cta("primaryCTA"),
                    cta("secondaryCTA"),
                    array(
                        "stats",
                        FieldType::Object(vec![text("value"), text("label")]),
                    ),
                ],
            ),
            object(
                "whoWeAre",
                vec![
                    text("title"),
                    array("paragraphs", FieldType::Text),
                    array("keyValues", icon_card()),
                    object(
                        "mission",
                        vec![text("title"), text("description"), text("foundedYear")],
                    ),
                ],
            ),
            object(
                "projectsIntro",
                vec![
                    text("title"),
                    text("intro"),
                    array("featured_projects", FieldType::Relationship(Kind::Project)),
                ],
            ),
            object(
                "servicesIntro",
                vec![
                    text("title"),
                    text("intro"),
                    array("featured_services", FieldType::Relationship(Kind::Program)),
                    object(
                        "ctaPanel",
                        vec![
                            text("heading"),
                            text("body"),
                            cta("primaryCTA"),
                            cta("secondaryCTA"),
                        ],
                    ),
                ],
            ),
        ],
    )
}

fn about() -> Schema {
    Schema::new(
        Kind::About,
        vec![
            object("hero", vec![text("title"), text("subtitle")]),
            object(
                "story",
                vec![array("paragraphs", FieldType::Text), image("image")],
            ),
            object(
                "values",
                vec![text("title"), text("intro"), array("values", icon_card())],
            ),
            object(
                "team",
                vec![
                    text("title"),
                    text("intro"),
                    array(
                        "members",
                        FieldType::Object(vec![
                            text("name"),
                            text("role"),
                            text("bio"),
                            image("avatar"),
                        ]),
                    ),
                ],
            ),
            object(
                "impactMetrics",
                vec![
                    text("title"),
                    text("intro"),
                    array(
                        "metrics",
                        FieldType::Object(vec![
                            text("icon"),
                            text("value"),
                            text("label"),
                            text("description"),
                        ]),
                    ),
                ],
            ),
            object(
                "partners",
                vec![
                    text("title"),
                    text("intro"),
                    array("partnerList", FieldType::Relationship(Kind::Partner)),
                ],
            ),
            array(
                "annual_reports",
                FieldType::Object(vec![text("year"), file("file"), text("summary")]),
            ),
            object("finalCTA", vec![text("heading"), text("body")]),
        ],
    )
}
