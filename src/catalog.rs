//! Curated icon lists shown in the picker grid

use crate::types::CuratedIcon;

/// Which curated list a picker browses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CatalogKind {
    /// Technologies and tools
    #[default]
    Skill,
    /// Soft skills
    Competence,
}

impl CatalogKind {
    pub fn icons(&self) -> &'static [CuratedIcon] {
        match self {
            CatalogKind::Skill => SKILL_ICONS,
            CatalogKind::Competence => COMPETENCE_ICONS,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            CatalogKind::Skill => "skill",
            CatalogKind::Competence => "competence",
        }
    }
}

/// Namespaces referenced by the curated lists
pub fn namespaces() -> impl Iterator<Item = &'static str> {
    SKILL_ICONS
        .iter()
        .chain(COMPETENCE_ICONS)
        .filter_map(|icon| icon.canonical.split_once(':').map(|(namespace, _)| namespace))
}

pub static SKILL_ICONS: &[CuratedIcon] = &[
    // Languages
    CuratedIcon::new("SiTypescript", "simple-icons:typescript"),
    CuratedIcon::new("SiJavascript", "simple-icons:javascript"),
    CuratedIcon::new("SiPython", "simple-icons:python"),
    CuratedIcon::new("FaJava", "fa-brands:java"),
    CuratedIcon::new("SiCplusplus", "simple-icons:cplusplus"),
    CuratedIcon::new("SiRust", "simple-icons:rust"),
    CuratedIcon::new("SiGo", "simple-icons:go"),
    CuratedIcon::new("SiPhp", "simple-icons:php"),
    CuratedIcon::new("SiRuby", "simple-icons:ruby"),
    CuratedIcon::new("SiSwift", "simple-icons:swift"),
    CuratedIcon::new("SiKotlin", "simple-icons:kotlin"),
    CuratedIcon::new("SiDart", "simple-icons:dart"),
    CuratedIcon::new("SiCsharp", "simple-icons:csharp"),
    // Frontend
    CuratedIcon::new("FaReact", "simple-icons:react"),
    CuratedIcon::new("FaVuejs", "simple-icons:vuedotjs"),
    CuratedIcon::new("FaAngular", "simple-icons:angular"),
    CuratedIcon::new("SiNextdotjs", "simple-icons:nextdotjs"),
    CuratedIcon::new("SiSvelte", "simple-icons:svelte"),
    CuratedIcon::new("SiTailwindcss", "simple-icons:tailwindcss"),
    CuratedIcon::new("FaHtml5", "simple-icons:html5"),
    CuratedIcon::new("FaCss3Alt", "simple-icons:css3"),
    CuratedIcon::new("SiSass", "simple-icons:sass"),
    CuratedIcon::new("SiBootstrap", "simple-icons:bootstrap"),
    CuratedIcon::new("SiMui", "simple-icons:mui"),
    CuratedIcon::new("SiRadixui", "simple-icons:radixui"),
    CuratedIcon::new("SiStyledcomponents", "simple-icons:styledcomponents"),
    CuratedIcon::new("SiFlutter", "simple-icons:flutter"),
    CuratedIcon::new("SiReactnative", "simple-icons:react"),
    // Backend
    CuratedIcon::new("FaNodeJs", "simple-icons:nodedotjs"),
    CuratedIcon::new("SiExpress", "simple-icons:express"),
    CuratedIcon::new("SiNestjs", "simple-icons:nestjs"),
    CuratedIcon::new("SiDjango", "simple-icons:django"),
    CuratedIcon::new("SiSpringboot", "simple-icons:springboot"),
    CuratedIcon::new("SiFastapi", "simple-icons:fastapi"),
    CuratedIcon::new("SiFlask", "simple-icons:flask"),
    CuratedIcon::new("SiDotnet", "simple-icons:dotnet"),
    CuratedIcon::new("SiLaravel", "simple-icons:laravel"),
    CuratedIcon::new("SiRubyonrails", "simple-icons:rubyonrails"),
    // Databases
    CuratedIcon::new("SiPostgresql", "simple-icons:postgresql"),
    CuratedIcon::new("SiMysql", "simple-icons:mysql"),
    CuratedIcon::new("TbBrandMysql", "tabler:brand-mysql"),
    CuratedIcon::new("SiMongodb", "simple-icons:mongodb"),
    CuratedIcon::new("TbBrandMongodb", "tabler:brand-mongodb"),
    CuratedIcon::new("SiRedis", "simple-icons:redis"),
    CuratedIcon::new("SiSqlite", "simple-icons:sqlite"),
    CuratedIcon::new("SiOracle", "simple-icons:oracle"),
    CuratedIcon::new("SiMicrosoftsqlserver", "simple-icons:microsoftsqlserver"),
    CuratedIcon::new("SiElasticsearch", "simple-icons:elasticsearch"),
    CuratedIcon::new("SiCassandra", "simple-icons:apachecassandra"),
    // DevOps / cloud
    CuratedIcon::new("FaDocker", "simple-icons:docker"),
    CuratedIcon::new("SiKubernetes", "simple-icons:kubernetes"),
    CuratedIcon::new("FaAws", "simple-icons:amazonaws"),
    CuratedIcon::new("SiGooglecloud", "simple-icons:googlecloud"),
    CuratedIcon::new("SiMicrosoftazure", "simple-icons:microsoftazure"),
    CuratedIcon::new("SiVercel", "simple-icons:vercel"),
    CuratedIcon::new("SiNetlify", "simple-icons:netlify"),
    CuratedIcon::new("SiHeroku", "simple-icons:heroku"),
    CuratedIcon::new("SiDigitalocean", "simple-icons:digitalocean"),
    CuratedIcon::new("SiJenkins", "simple-icons:jenkins"),
    CuratedIcon::new("SiGithubactions", "simple-icons:githubactions"),
    CuratedIcon::new("SiCircleci", "simple-icons:circleci"),
    CuratedIcon::new("SiTerraform", "simple-icons:terraform"),
    CuratedIcon::new("SiAnsible", "simple-icons:ansible"),
    CuratedIcon::new("SiNginx", "simple-icons:nginx"),
    CuratedIcon::new("SiApache", "simple-icons:apache"),
    // Tools
    CuratedIcon::new("FaGithub", "simple-icons:github"),
    CuratedIcon::new("FaGitAlt", "simple-icons:git"),
    CuratedIcon::new("SiGitlab", "simple-icons:gitlab"),
    CuratedIcon::new("SiBitbucket", "simple-icons:bitbucket"),
    CuratedIcon::new("SiVscode", "simple-icons:visualstudiocode"),
    CuratedIcon::new("TbBrandVscode", "tabler:brand-vscode"),
    CuratedIcon::new("SiWebstorm", "simple-icons:webstorm"),
    CuratedIcon::new("SiIntellijidea", "simple-icons:intellijidea"),
    CuratedIcon::new("FaLinux", "fa:linux"),
    CuratedIcon::new("SiFigma", "simple-icons:figma"),
    CuratedIcon::new("SiPostman", "simple-icons:postman"),
    CuratedIcon::new("SiInsomnia", "simple-icons:insomnia"),
    CuratedIcon::new("SiJira", "simple-icons:jira"),
    CuratedIcon::new("SiNotion", "simple-icons:notion"),
    CuratedIcon::new("SiSlack", "simple-icons:slack"),
    CuratedIcon::new("SiTrello", "simple-icons:trello"),
    // Other
    CuratedIcon::new("SiGraphql", "simple-icons:graphql"),
    CuratedIcon::new("SiPrisma", "simple-icons:prisma"),
    CuratedIcon::new("SiDrizzle", "simple-icons:drizzle"),
    CuratedIcon::new("SiFirebase", "simple-icons:firebase"),
    CuratedIcon::new("SiSupabase", "simple-icons:supabase"),
    CuratedIcon::new("SiStripe", "simple-icons:stripe"),
    CuratedIcon::new("SiAuth0", "simple-icons:auth0"),
    CuratedIcon::new("SiJsonwebtokens", "simple-icons:jsonwebtokens"),
    CuratedIcon::new("SiWebpack", "simple-icons:webpack"),
    CuratedIcon::new("SiVite", "simple-icons:vite"),
    CuratedIcon::new("SiEslint", "simple-icons:eslint"),
    CuratedIcon::new("SiBiome", "simple-icons:biome"),
    CuratedIcon::new("SiPrettier", "simple-icons:prettier"),
    CuratedIcon::new("SiJest", "simple-icons:jest"),
    CuratedIcon::new("SiVitest", "simple-icons:vitest"),
    CuratedIcon::new("SiCypress", "simple-icons:cypress"),
    CuratedIcon::new("SiTestinglibrary", "simple-icons:testinglibrary"),
    CuratedIcon::new("SiStorybook", "simple-icons:storybook"),
    CuratedIcon::new("SiNpm", "simple-icons:npm"),
    CuratedIcon::new("SiYarn", "simple-icons:yarn"),
    CuratedIcon::new("SiPnpm", "simple-icons:pnpm"),
    CuratedIcon::new("TbBrandTypescript", "tabler:brand-typescript"),
    CuratedIcon::new("RiJavascriptLine", "ri:javascript-line"),
];

pub static COMPETENCE_ICONS: &[CuratedIcon] = &[
    CuratedIcon::new("MdAccountGroup", "mdi:account-group"),
    CuratedIcon::new("MdMessage", "mdi:message-text"),
    CuratedIcon::new("MdLeaderboard", "mdi:podium"),
    CuratedIcon::new("MdLightbulb", "mdi:lightbulb-on"),
    CuratedIcon::new("MdPsychology", "mdi:psychology"),
    CuratedIcon::new("MdSchedule", "mdi:calendar-clock"),
    CuratedIcon::new("MdTrendingUp", "mdi:trending-up"),
    CuratedIcon::new("MdHandshake", "mdi:handshake"),
    CuratedIcon::new("MdAutoAwesome", "mdi:auto-fix"),
    CuratedIcon::new("MdGroups", "mdi:account-group-outline"),
    CuratedIcon::new("MdPublic", "mdi:earth"),
    CuratedIcon::new("MdSchool", "mdi:school"),
    CuratedIcon::new("MdWork", "mdi:briefcase"),
    CuratedIcon::new("MdEmojiObjects", "mdi:lightbulb-outline"),
    CuratedIcon::new("MdStar", "mdi:star"),
    CuratedIcon::new("MdThumbUp", "mdi:thumb-up-outline"),
    CuratedIcon::new("MdBalance", "mdi:scale-balance"),
    CuratedIcon::new("MdFeedback", "mdi:comment-text-outline"),
    CuratedIcon::new("MdManageHistory", "mdi:calendar-check"),
    CuratedIcon::new("MdRocketLaunch", "mdi:rocket-launch"),
    CuratedIcon::new("MdDiversity", "mdi:diversify"),
    CuratedIcon::new("MdPrecisionManufacturing", "mdi:target"),
    CuratedIcon::new("MdInsights", "mdi:chart-line"),
    CuratedIcon::new("MdVolunteerActivism", "mdi:heart-plus-outline"),
    CuratedIcon::new("MdSupport", "mdi:headset"),
    CuratedIcon::new("MdEngineering", "mdi:cog"),
    CuratedIcon::new("MdGroupWork", "mdi:account-multiple"),
    CuratedIcon::new("MdTipsAndUpdates", "mdi:lightbulb-outline"),
    CuratedIcon::new("MdTimeline", "mdi:timeline"),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CanonicalName;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_entries_are_canonical_and_unique() {
        for kind in [CatalogKind::Skill, CatalogKind::Competence] {
            let mut seen = HashSet::new();
            for icon in kind.icons() {
                assert!(CanonicalName::parse(icon.canonical).is_some(), "{}", icon.canonical);
                assert!(seen.insert(icon.name), "duplicate {} in {}", icon.name, kind.name());
            }
        }
    }

    #[test]
    fn test_default_kind_is_skill() {
        assert_eq!(CatalogKind::default().icons().len(), SKILL_ICONS.len());
        assert_eq!(CatalogKind::Competence.icons()[0].name, "MdAccountGroup");
    }

    #[test]
    fn test_namespaces() {
        let namespaces: HashSet<&str> = namespaces().collect();
        for namespace in ["fa-brands", "simple-icons", "mdi", "tabler"] {
            assert!(namespaces.contains(namespace), "missing {namespace}");
        }
    }
}
