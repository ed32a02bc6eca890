use constcat::concat;

mod components;
mod home;
mod variables;

pub use components::BASE_COMPONENTS;
pub use home::HOME_STYLES;
pub use variables::CSS_VARIABLES;

// Site style bundling
pub const SITE_STYLES: &str = concat!(
    r#"
/* Global resets and base styles */
:root {
  scroll-behavior: smooth;
  font-size: 62.5%;
}

* {
  margin: 0;
  padding: 0;
  box-sizing: border-box;
}

html, body {
  height: 100%;
  color: var(--highlight);
  background-color: var(--background);
}

body {
  font-family: var(--font-body);
  line-height: 1.5;
}

a {
  color: var(--highlight);
  text-decoration: none;
}
"#,
    CSS_VARIABLES,
    BASE_COMPONENTS,
    r#"
/* Application-specific styles */
.app-header {
  width: 100%;
  height: var(--header-height);
  position: fixed;
  z-index: 100;
  background-color: var(--background-veil);
  top: 0;
  left: 0;
}

.nav-container {
  width: 95%;
  height: 100%;
  max-width: var(--content-width);
  margin: 0 auto;
  display: flex;
  justify-content: space-between;
  align-items: center;
  padding-left: 2%;
  padding-right: 2%;
}

.logo img {
  width: 40px;
  height: 40px;
}

.nav-links {
  display: flex;
}

.nav-link {
  display: flex;
  flex-direction: column;
  justify-content: center;
  margin: 0 1rem;
  font-family: var(--font-heading);
  letter-spacing: -0.03rem;
  font-weight: 300;
  font-size: 1.6rem;
  text-decoration: none;
  text-transform: uppercase;
  color: var(--highlight);
}

.nav-link:hover {
  color: var(--bright-blue);
  text-decoration: none;
}

.nav-link.active {
  color: var(--bright-blue);
}

@media (min-width: 980px) {
  .nav-link {
    font-size: 1.8rem;
  }
}

.menu-button {
  z-index: 100;
  height: 100%;
  display: flex;
  flex-direction: column;
  justify-content: center;
  background: none;
  border: none;
  color: var(--highlight);
  cursor: pointer;
}

.menu-button:hover {
  color: var(--bright-blue);
}

.menu-overlay {
  position: fixed;
  z-index: 50;
  top: 0;
  left: 0;
  height: 100%;
  width: 100%;
}

.floating-menu {
  position: fixed;
  z-index: 100;
  top: var(--header-height);
  left: 0;
  width: 100%;
  background-color: var(--background-veil);
  display: flex;
  flex-direction: column;
  justify-content: center;
  text-align: center;
}

.menu-link {
  padding: 3rem 0;
}
"#
);
