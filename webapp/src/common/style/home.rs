pub const HOME_STYLES: &str = r#"
/* Home page hero */
.hero-main {
  position: absolute;
  z-index: 10;
  height: 100vh;
  width: 100%;
  max-width: 100%;
  display: flex;
  flex-direction: column;
  justify-content: center;
  align-items: center;
}

.hero-logo {
  width: 65px;
  height: 65px;
}

@media (min-width: 980px) {
  .hero-logo {
    width: 75px;
    height: 75px;
  }
}

.hero-title {
  font-family: var(--font-heading);
  font-weight: 300;
  letter-spacing: -0.05rem;
  text-transform: uppercase;
  font-size: 2.2rem;
  margin: 3rem 0 1.5rem 0;
  text-align: center;
}

@media (min-width: 980px) {
  .hero-title {
    font-size: 2.4rem;
    margin: 4rem 0 2rem 0;
  }
}

.hero-tagline {
  font-family: var(--font-heading);
  font-weight: 300;
  letter-spacing: -0.05rem;
  font-size: 1.6rem;
  margin: 0;
  text-align: center;
}

@media (min-width: 980px) {
  .hero-tagline {
    font-size: 1.8rem;
  }
}

.hero-image {
  height: 100vh;
  width: 100%;
  max-width: 100%;
  object-fit: cover;
  overflow: hidden;
}

/* About section */
.about-text {
  width: 37.5rem;
  font-family: var(--font-body);
  margin: 0 0 3rem 0;
}

.about-text p {
  letter-spacing: -0.01rem;
  font-weight: 400;
  font-size: 1.6rem;
  text-align: center;
  line-height: 2.4rem;
  margin: 0;
  padding: 0;
}

@media (min-width: 980px) {
  .about-text {
    width: 72rem;
    margin: 0 0 4rem 0;
  }

  .about-text p {
    font-size: 1.8rem;
    line-height: 2.6rem;
  }
}
"#;
