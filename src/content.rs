//! Static profile content.
//!
//! Everything that does not come from an API lives here, in display
//! order. The live parts (presence, now playing, repos) come from
//! `feed` and land on top of this.

pub const NAME: &str = "WraithsDev";
pub const ABOUT_NAME: &str = "Enes";
pub const TAGLINE: &str = "İçerik Üretici - Geliştirici";
pub const LOCATION: &str = "Antalya / Türkiye";

pub const ABOUT: &str = "Yaklaşık beş yıldır yazılım geliştirme alanında kendimi \
geliştirmekteyim ve son iki yıldır gerçekleştirdiğim projeleri YouTube platformunda \
paylaşarak bilgi birikimimi toplulukla paylaşıyorum. Özellikle Discord botları \
geliştirme konusunda derin bir tutkuya sahibim ve bu alanda yenilikçi projeler \
üretmekten büyük keyif alıyorum. Yazılım geliştirme sürecinde hem teknik becerilerimi \
hem de yaratıcı problem çözme yeteneklerimi sürekli olarak ileriye taşımaya özen \
gösteriyorum.";

pub const CONTACT: &str = "Benimle iletişime geçmek isterseniz @WraithsDev veya e-posta. \
İş birliği fırsatları, projeler için her zaman açığım!";

pub struct Link {
    pub label: &'static str,
    pub url: &'static str,
}

pub const LINKS: &[Link] = &[
    Link {
        label: "GitHub",
        url: "https://github.com/wraithsdev",
    },
    Link {
        label: "Email",
        url: "mailto:wraithsisbirligi@gmail.com",
    },
    Link {
        label: "Youtube",
        url: "https://youtube.com/@WraithsDev",
    },
];

pub const TECHNOLOGIES: &[&str] = &[
    "Windows",
    "HTML",
    "CSS",
    "Java",
    "JavaScript",
    "TypeScript",
    "Python",
    "Node.js",
    "Express",
    "MongoDB",
    "Git",
    "GitHub",
    "VSCode",
    "Visual Studio",
    "Azure",
    "Discord",
];

pub struct Experience {
    pub name: &'static str,
    pub summary: &'static str,
    pub role: &'static str,
    pub period: &'static str,
}

pub const EXPERIENCE: &[Experience] = &[
    Experience {
        name: "Celestial Network",
        summary: "Minecraft Sunucusu",
        role: "Yardımcı Kurucu - Ekip Yönetimi",
        period: "2025 - Günümüz",
    },
    Experience {
        name: "Sipariş Hanem",
        summary: "Güvenilir SMM Hizmeti",
        role: "Kurulum ve Bot Geliştirme",
        period: "2025 - Günümüz",
    },
    Experience {
        name: "Altron 🎵",
        summary: "Türkçe En İyi Müzik Botu",
        role: "Bot Geliştirme",
        period: "2024 - 2025",
    },
    Experience {
        name: "Eldoria Network",
        summary: "Minecraft Sunucusu",
        role: "Plugin ve Script Geliştirme",
        period: "2023 - 2024",
    },
    Experience {
        name: "Dark Uptime",
        summary: "Discord Bot Uptime Hizmeti",
        role: "Bot Geliştirme",
        period: "2019 - 2023",
    },
    Experience {
        name: "Via Network",
        summary: "Minecraft Hub Sunucusu",
        role: "Sunucu Yönetimi",
        period: "2015 - 2019",
    },
];

pub const SECTION_TECH: &str = "🤖 Teknolojiler ve Araçlar";
pub const SECTION_REPOS: &str = "🌍 Açık Kaynak Projelerim";
pub const SECTION_EXPERIENCE: &str = "💼 Çalıştığım Projeler";
