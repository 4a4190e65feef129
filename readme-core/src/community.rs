//! Community channels listed at the bottom of every Feature README.

use crate::project::GITHUB_PREFIX;

/// Discord server every channel belongs to.
pub const DISCORD_SERVER: &str = "https://discord.com/channels/1357343453364748419";

/// One row of the community table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommunityChannel {
    /// Feature name shown in the first column.
    pub feature: &'static str,
    /// Repository name under [`GITHUB_PREFIX`].
    pub github_repo: &'static str,
    pub discord_channel_name: &'static str,
    pub discord_channel_id: &'static str,
    /// Disabled rows are kept for reference but never rendered.
    pub enabled: bool,
    /// Private rows are never rendered.
    pub public: bool,
}

impl CommunityChannel {
    pub fn github_url(&self) -> String {
        format!("{GITHUB_PREFIX}{}", self.github_repo)
    }

    pub fn discord_url(&self) -> String {
        format!("{DISCORD_SERVER}/{}", self.discord_channel_id)
    }

    fn is_listed(&self) -> bool {
        self.enabled && self.public
    }
}

/// All known channels, in no particular order.
pub const COMMUNITY_CHANNELS: &[CommunityChannel] = &[
    CommunityChannel {
        feature: "OpenStudioLandscapes",
        github_repo: "OpenStudioLandscapes",
        discord_channel_name: "# openstudiolandscapes-general",
        discord_channel_id: "1357343454065328202",
        enabled: true,
        public: true,
    },
    CommunityChannel {
        feature: "OpenStudioLandscapes-Ayon",
        github_repo: "OpenStudioLandscapes-Ayon",
        discord_channel_name: "# openstudiolandscapes-ayon",
        discord_channel_id: "1357722468336271411",
        enabled: true,
        public: true,
    },
    CommunityChannel {
        feature: "OpenStudioLandscapes-Dagster",
        github_repo: "OpenStudioLandscapes-Dagster",
        discord_channel_name: "# openstudiolandscapes-dagster",
        discord_channel_id: "1358016764608249856",
        enabled: true,
        public: true,
    },
    CommunityChannel {
        feature: "OpenStudioLandscapes-Deadline-10-2",
        github_repo: "OpenStudioLandscapes-Deadline-10-2",
        discord_channel_name: "# openstudiolandscapes-deadline-10-2",
        discord_channel_id: "1357343453364748419",
        enabled: true,
        public: true,
    },
    CommunityChannel {
        feature: "OpenStudioLandscapes-Deadline-10-2-Worker",
        github_repo: "OpenStudioLandscapes-Deadline-10-2-Worker",
        discord_channel_name: "# openstudiolandscapes-deadline-10-2-worker",
        discord_channel_id: "1357343453364748419",
        enabled: true,
        public: true,
    },
    CommunityChannel {
        feature: "OpenStudioLandscapes-NukeRLM-8",
        github_repo: "OpenStudioLandscapes-NukeRLM-8",
        discord_channel_name: "# openstudiolandscapes-nukerlm-8",
        discord_channel_id: "1358017656732782672",
        enabled: true,
        public: true,
    },
    CommunityChannel {
        feature: "OpenStudioLandscapes-SESI-gcc-9-3-Houdini-20",
        github_repo: "OpenStudioLandscapes-SESI-gcc-9-3-Houdini-20",
        discord_channel_name: "# openstudiolandscapes-sesi-gcc-9-3-houdini-20",
        discord_channel_id: "1357343453364748419",
        enabled: true,
        public: true,
    },
    CommunityChannel {
        feature: "OpenStudioLandscapes-Kitsu",
        github_repo: "OpenStudioLandscapes-Kitsu",
        discord_channel_name: "# openstudiolandscapes-kitsu",
        discord_channel_id: "1357638253632688231",
        enabled: true,
        public: true,
    },
    CommunityChannel {
        feature: "OpenStudioLandscapes-Watchtower",
        github_repo: "OpenStudioLandscapes-Watchtower",
        discord_channel_name: "# openstudiolandscapes-watchtower",
        discord_channel_id: "",
        enabled: false,
        public: false,
    },
];

/// Channels that appear in the README: enabled, public, sorted by feature.
pub fn listed() -> Vec<CommunityChannel> {
    listed_from(COMMUNITY_CHANNELS)
}

/// [`listed`] over an arbitrary table.
pub fn listed_from(channels: &[CommunityChannel]) -> Vec<CommunityChannel> {
    let mut rows: Vec<CommunityChannel> = channels
        .iter()
        .copied()
        .filter(CommunityChannel::is_listed)
        .collect();
    rows.sort_by(|a, b| a.feature.cmp(b.feature));
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    fn channel(feature: &'static str, enabled: bool, public: bool) -> CommunityChannel {
        CommunityChannel {
            feature,
            github_repo: feature,
            discord_channel_name: "# test",
            discord_channel_id: "42",
            enabled,
            public,
        }
    }

    #[test]
    fn disabled_and_private_rows_are_dropped() {
        let table = [
            channel("B", true, true),
            channel("A", false, true),
            channel("C", true, false),
        ];
        let rows = listed_from(&table);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].feature, "B");
    }

    #[test]
    fn rows_are_sorted_by_feature() {
        let table = [
            channel("Zeta", true, true),
            channel("Alpha", true, true),
            channel("Mid", true, true),
        ];
        let names: Vec<_> = listed_from(&table).iter().map(|c| c.feature).collect();
        assert_eq!(names, vec!["Alpha", "Mid", "Zeta"]);
    }

    #[test]
    fn builtin_table_lists_the_engine_first() {
        let rows = listed();
        assert_eq!(rows[0].feature, "OpenStudioLandscapes");
        assert!(rows.iter().all(|c| c.enabled && c.public));
    }

    #[test]
    fn urls_are_built_from_prefixes() {
        let c = channel("OpenStudioLandscapes-Ayon", true, true);
        assert_eq!(
            c.github_url(),
            "https://github.com/michimussato/OpenStudioLandscapes-Ayon"
        );
        assert_eq!(
            c.discord_url(),
            "https://discord.com/channels/1357343453364748419/42"
        );
    }
}
