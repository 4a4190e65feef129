use readme_core::{CommunityChannel, Configuration, ProjectIdentity, Verbosity, VersionToken};
use readme_renderer::{Renderer, TemplateContext};
use rstest::rstest;

fn config(versions: &[&str]) -> Configuration {
    let tokens = versions
        .iter()
        .map(|v| VersionToken::new(*v).expect("token"))
        .collect();
    Configuration::new(tokens, Verbosity::Quiet).expect("config")
}

fn ayon() -> ProjectIdentity {
    ProjectIdentity {
        repo_name: "OpenStudioLandscapes-Ayon".to_string(),
        package: Some("OpenStudioLandscapes.Ayon".to_string()),
    }
}

fn render(versions: &[&str], identity: &ProjectIdentity) -> String {
    Renderer::new()
        .expect("renderer")
        .render_readme(&config(versions), identity)
        .expect("render")
}

#[rstest]
#[case(&["3.11"])]
#[case(&["3.10", "3.11"])]
#[case(&["3.12", "3.9", "3.12"])]
fn rendering_is_byte_identical(#[case] versions: &[&str]) {
    let first = render(versions, &ayon());
    let second = render(versions, &ayon());
    assert_eq!(first.as_bytes(), second.as_bytes());
}

#[test]
fn single_version_appears_in_body() {
    let out = render(&["3.11"], &ayon());
    assert!(out.contains("3.11"));
    assert!(out.contains("- `python3.11`\n- `OpenStudioLandscapes`\n"));
    assert!(out.contains("enabled for testing:\n3.11.\n"));
}

#[rstest]
#[case(&["3.10", "3.11"])]
#[case(&["3.11", "3.10"])]
fn versions_keep_supplied_order(#[case] versions: &[&str]) {
    let out = render(versions, &ayon());

    let bullets = format!("- `python{}`\n- `python{}`\n", versions[0], versions[1]);
    assert!(out.contains(&bullets), "requirements list out of order:\n{out}");

    let joined = format!("{}, {}.", versions[0], versions[1]);
    assert!(out.contains(&joined), "testing line out of order:\n{out}");
}

#[test]
fn install_section_uses_clone_url() {
    let out = render(&["3.11"], &ayon());
    assert!(out.contains(
        "git -C ./.features clone https://github.com/michimussato/OpenStudioLandscapes-Ayon.git"
    ));
    assert!(out.contains("pip install -e \"./.features/OpenStudioLandscapes-Ayon\""));
}

#[test]
fn registration_block_only_with_package() {
    let with_package = render(&["3.11"], &ayon());
    assert!(with_package.contains("\"module\": \"OpenStudioLandscapes.Ayon.definitions\""));

    let without = render(&["3.11"], &ProjectIdentity::named("OpenStudioLandscapes-Ayon"));
    assert!(!without.contains("THIRD_PARTY"));
    assert!(without.contains("vcs-support/).\n\n## Configure"));
}

#[test]
fn community_rows_follow_context_order() {
    let channels = [
        CommunityChannel {
            feature: "Alpha",
            github_repo: "Alpha",
            discord_channel_name: "# alpha",
            discord_channel_id: "1",
            enabled: true,
            public: true,
        },
        CommunityChannel {
            feature: "Beta",
            github_repo: "Beta",
            discord_channel_name: "# beta",
            discord_channel_id: "2",
            enabled: true,
            public: true,
        },
    ];
    let ctx = TemplateContext::with_channels(&config(&["3.11"]), &ayon(), &channels);
    let out = Renderer::new().unwrap().render(&ctx).unwrap();

    let alpha = out.find("| Alpha |").expect("alpha row");
    let beta = out.find("| Beta |").expect("beta row");
    assert!(alpha < beta);
    assert!(out.contains(
        "| Alpha | [https://github.com/michimussato/Alpha](https://github.com/michimussato/Alpha) \
         | [# alpha](https://discord.com/channels/1357343453364748419/1) |"
    ));
}

#[test]
fn builtin_community_table_skips_disabled_rows() {
    let out = render(&["3.11"], &ayon());
    assert!(out.contains("| OpenStudioLandscapes-Kitsu |"));
    assert!(!out.contains("Watchtower"));
}

#[test]
fn configure_section_links_models_when_package_known() {
    let out = render(&["3.11"], &ayon());
    assert!(out.contains(
        "The following settings are available in `OpenStudioLandscapes-Ayon` and are based on\n\
         [`OpenStudioLandscapes-Ayon/tree/main/src/OpenStudioLandscapes/Ayon/config/models.py`]\
         (https://github.com/michimussato/OpenStudioLandscapes-Ayon/tree/main/src/OpenStudioLandscapes/Ayon/config/models.py).\n\n\
         ## Testing"
    ));

    let without = render(&["3.11"], &ProjectIdentity::named("OpenStudioLandscapes-Ayon"));
    assert!(!without.contains("config/models.py"));
    assert!(without.contains("you made to the `config.yml`.\n\n## Testing"));
}
