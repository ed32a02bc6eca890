// site-wide metadata, the compile-time equivalent of the deployment's
// site config

pub const SITE_TITLE: &str = "morganhale.dev";
pub const SITE_DESCRIPTION: &str = "Personal website of Morgan Hale.";

pub const AUTHOR_NAME: &str = "Morgan Hale";
pub const AUTHOR_TAGLINE: &str = "Software Engineer | Writer";
pub const AUTHOR_EMAIL: &str = "morgan@morganhale.dev";

pub const GITHUB_URL: &str = "https://github.com/morganhale";
pub const TWITTER_URL: &str = "https://twitter.com/morganhale";
pub const LINKEDIN_URL: &str = "https://www.linkedin.com/in/morganhale/";
