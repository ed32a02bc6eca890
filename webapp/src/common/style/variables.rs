pub const CSS_VARIABLES: &str = r#"
:root {
  /* Dark theme */
  --background: #101921;
  --background-highlight: #262D33;
  --non-focus: #585F65;
  --main: #81878B;
  --main-bright: #9DA1A4;
  --highlight: #DADDDF;

  /* Bright accents */
  --bright-red: #FF0014;
  --bright-orange: #FF6E00;
  --bright-yellow: #F3A900;
  --bright-green: #009B00;
  --bright-cyan: #009C94;
  --bright-blue: #008EFF;
  --bright-purple: #BF2BFF;
  --bright-magenta: #F5006C;

  /* Translucent surfaces (background + AA alpha) */
  --background-veil: #101921AA;

  /* Typography */
  --font-heading: 'Montserrat', sans-serif;
  --font-body: 'Libre Baskerville', serif;
  --font-mono: 'IBM Plex Mono', monospace;

  /* Layout */
  --header-height: 50px;
  --content-width: 960px;
}"#;
