//! Home, about and contact pages

use serde::Serialize;

use super::{non_empty, Pages};
use crate::content::models::{
    AboutContent, CtaPanel, HomeContent, HomeHero, Partner, Program, Project, SocialLink, WhoWeAre,
};
use crate::content::ContentReader;
use crate::error::Result;
use crate::helpers::{mailto, maps_search_url, tel, whatsapp_url};
use crate::resolve::{resolve_many, PartnerSummary, ServiceSummary};

use super::project::ProjectCard;

const DEFAULT_HERO_IMAGE: &str = "/images/projects/trial-of-this-project/hero_image.jpg";
const DEFAULT_ADDRESS: &str = "Kigali, Rwanda";

#[derive(Debug, Serialize)]
pub struct ProjectsBlock {
    pub title: Option<String>,
    pub intro: Option<String>,
    pub featured: Vec<ProjectCard>,
}

#[derive(Debug, Serialize)]
pub struct ServicesBlock {
    pub title: Option<String>,
    pub intro: Option<String>,
    pub featured: Vec<ServiceSummary>,
    pub cta_panel: CtaPanel,
}

#[derive(Debug, Serialize)]
pub struct HomePage {
    pub hero: HomeHero,
    pub who_we_are: WhoWeAre,
    pub projects: ProjectsBlock,
    pub services: ServicesBlock,
}

#[derive(Debug, Serialize)]
pub struct AboutPage {
    #[serde(flatten)]
    pub content: AboutContent,
    /// The partner list, resolved
    pub partner_cards: Vec<PartnerSummary>,
}

#[derive(Debug, Serialize)]
pub struct ContactPage {
    pub address: String,
    pub maps_url: String,
    pub email: Option<String>,
    pub email_href: Option<String>,
    pub phone: Option<String>,
    pub phone_href: Option<String>,
    pub whatsapp: Option<String>,
    pub whatsapp_href: Option<String>,
    pub social_links: Vec<SocialLink>,
}

impl<R: ContentReader> Pages<'_, R> {
    /// Home page; `None` until the home singleton is authored
    pub async fn home_page(&self) -> Result<Option<HomePage>> {
        let Some(home) = self.reader.read_singleton::<HomeContent>().await? else {
            return Ok(None);
        };

        let (projects, services) = futures::join!(
            resolve_many::<Project, _, _, _>(
                self.reader,
                home.projects_intro.featured_projects.iter().map(Option::as_deref),
            ),
            resolve_many::<Program, _, _, _>(
                self.reader,
                home.services_intro.featured_services.iter().map(Option::as_deref),
            ),
        );

        let mut hero = home.hero;
        if non_empty(&hero.background_image).is_none() {
            hero.background_image = Some(DEFAULT_HERO_IMAGE.to_string());
        }

        Ok(Some(HomePage {
            hero,
            who_we_are: home.who_we_are,
            projects: ProjectsBlock {
                title: home.projects_intro.title,
                intro: home.projects_intro.intro,
                featured: projects.iter().map(ProjectCard::from).collect(),
            },
            services: ServicesBlock {
                title: home.services_intro.title,
                intro: home.services_intro.intro,
                featured: services.iter().map(ServiceSummary::from).collect(),
                cta_panel: home.services_intro.cta_panel,
            },
        }))
    }

    /// About page; `None` until the about singleton is authored
    pub async fn about_page(&self) -> Result<Option<AboutPage>> {
        let Some(about) = self.reader.read_singleton::<AboutContent>().await? else {
            return Ok(None);
        };

        let partners = resolve_many::<Partner, _, _, _>(
            self.reader,
            about.partners.partner_list.iter().map(Option::as_deref),
        )
        .await;

        Ok(Some(AboutPage {
            partner_cards: partners.iter().map(PartnerSummary::from).collect(),
            content: about,
        }))
    }

    /// Contact details and social links from the settings singleton
    pub async fn contact_page(&self) -> Result<ContactPage> {
        let settings = self.settings().await?;
        let contact = settings.contact;

        let address = non_empty(&contact.address).unwrap_or_else(|| DEFAULT_ADDRESS.to_string());
        let email = non_empty(&contact.email);
        let phone = non_empty(&contact.phone);
        let whatsapp = non_empty(&contact.whatsapp);

        Ok(ContactPage {
            maps_url: maps_search_url(&address),
            address,
            email_href: email.as_deref().map(mailto),
            email,
            phone_href: phone.as_deref().map(tel),
            phone,
            whatsapp_href: whatsapp.as_deref().map(whatsapp_url),
            whatsapp,
            social_links: settings.social_links,
        })
    }
}
