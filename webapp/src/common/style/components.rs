pub const BASE_COMPONENTS: &str = r#"
/* Base Component Styles */

/* Sections */
.section-wrapper {
  width: 100%;
  display: flex;
  flex-direction: column;
  justify-content: center;
  align-items: center;
  padding: 6rem 0;
}

.section-wrapper.highlight {
  background-color: var(--background-highlight);
}

@media (min-width: 980px) {
  .section-wrapper {
    padding: 8rem 0;
  }
}

.section-title {
  font-family: var(--font-heading);
  text-transform: uppercase;
  margin: 0 auto 3rem auto;
  text-align: center;
  width: 30rem;
}

.section-title h1 {
  font-weight: 300;
  font-size: 2.2rem;
  letter-spacing: -0.05rem;
  margin: 0;
}

@media (min-width: 768px) {
  .section-title {
    width: 72rem;
    padding-bottom: 1.4rem;
    margin: 0 0 3.5rem 0;
    border-bottom: 1px solid var(--highlight);
  }

  .section-title h1 {
    font-size: 2.3rem;
  }
}

@media (min-width: 980px) {
  .section-title {
    width: 96rem;
    padding-bottom: 1.6rem;
    margin: 0 0 4rem 0;
  }

  .section-title h1 {
    font-size: 2.4rem;
  }
}

/* Article stubs */
.article-link {
  text-decoration: none;
  width: 100%;
  margin: 0;
  padding: 0;
}

.article-stub {
  display: flex;
  flex-direction: column;
  margin: 0 0 4rem 0;
  width: 100%;
}

.article-stub:hover {
  background: var(--background-highlight);
}

@media (min-width: 768px) {
  .article-stub {
    flex-direction: row;
    justify-content: center;
    align-items: flex-start;
  }
}

.stub-accent {
  display: none;
}

@media (min-width: 768px) {
  .stub-accent {
    display: block;
    width: 2rem;
    height: 2rem;
  }
}

.stub-text {
  display: flex;
  flex-direction: column;
  align-items: center;
  border: none;
}

@media (min-width: 768px) {
  .stub-text {
    border-left-width: 1px;
    border-left-style: solid;
    padding: 0 0 0 2rem;
  }
}

.stub-front-matter {
  width: 30rem;
  border-top-width: 1px;
  border-top-style: solid;
  padding-top: 1rem;
}

@media (min-width: 375px) {
  .stub-front-matter {
    width: 35rem;
  }
}

@media (min-width: 768px) {
  .stub-front-matter {
    width: 60rem;
    padding: 0;
    border-top-style: none;
  }
}

@media (min-width: 980px) {
  .stub-front-matter {
    width: 72rem;
  }
}

.stub-title {
  color: var(--highlight);
  font-family: var(--font-heading);
  letter-spacing: -0.03rem;
  margin: 0;
  font-weight: 500;
  font-size: 1.6rem;
}

@media (min-width: 980px) {
  .stub-title {
    font-size: 2rem;
  }
}

.stub-excerpt {
  color: var(--main-bright);
  font-family: var(--font-body);
  font-weight: 400;
  font-style: italic;
  letter-spacing: -0.01rem;
  margin: 0.4rem 0 0.2rem 0;
  font-size: 1.4rem;
}

@media (min-width: 980px) {
  .stub-excerpt {
    margin: 0.5rem 0 0.25rem;
    font-size: 1.6rem;
  }
}

/* Skeletons */
.skeleton {
  background-color: var(--background-highlight);
  border-radius: 4px;
  animation: skeleton-pulse 1.5s ease-in-out infinite;
}

@keyframes skeleton-pulse {
  0% { opacity: 1; }
  50% { opacity: 0.5; }
  100% { opacity: 1; }
}

.stub-skeleton {
  width: 30rem;
  height: 8rem;
  margin: 0 0 4rem 0;
}

@media (min-width: 375px) {
  .stub-skeleton {
    width: 35rem;
  }
}

@media (min-width: 768px) {
  .stub-skeleton {
    width: 60rem;
  }
}

.load-error {
  color: var(--main-bright);
  font-family: var(--font-body);
  font-style: italic;
  font-size: 1.4rem;
}

/* Article detail */
.article-hero {
  position: relative;
  width: 100%;
  height: 80vh;
  overflow-x: hidden;
}

@media (min-width: 768px) {
  .article-hero {
    height: 70vh;
  }
}

.lead-image {
  position: absolute;
  top: 0;
  left: 0;
  width: 100%;
  height: 100%;
  object-fit: cover;
}

.title-container {
  position: absolute;
  top: 0;
  z-index: 5;
  height: 100%;
  display: flex;
  flex-direction: column;
  justify-content: center;
  align-items: flex-start;
}

.article-title {
  padding: 2rem;
  background-color: var(--background-veil);
  color: var(--highlight);
  font-family: var(--font-heading);
  font-weight: 500;
  border-right-width: 0.5rem;
  border-right-style: solid;
  font-size: 3rem;
  max-width: 32rem;
  margin: 0;
}

@media (min-width: 375px) {
  .article-title {
    font-size: 3.5rem;
    max-width: 35rem;
  }
}

@media (min-width: 768px) {
  .article-title {
    font-size: 4rem;
    max-width: 72rem;
  }
}

@media (min-width: 980px) {
  .article-title {
    font-size: 4.5rem;
  }
}

.article-date {
  text-transform: uppercase;
  background-color: var(--background-veil);
  font-family: var(--font-heading);
  font-weight: 300;
  font-size: 1.4rem;
  padding: 0.5rem;
  margin: 0;
}

.page-container {
  width: 300px;
  margin: 3rem auto;
}

@media (min-width: 375px) {
  .page-container {
    width: 350px;
  }
}

@media (min-width: 768px) {
  .page-container {
    width: 660px;
  }
}

@media (min-width: 980px) {
  .page-container {
    width: 720px;
  }
}

.article-body {
  font-family: var(--font-body);
  font-size: 1.6rem;
  line-height: 2.4rem;
  letter-spacing: -0.01rem;
}

.article-body h1,
.article-body h2,
.article-body h3 {
  font-family: var(--font-heading);
  font-weight: 500;
  color: var(--highlight);
  margin: 3rem 0 1rem 0;
}

.article-body p {
  margin: 0 0 1.6rem 0;
}

.article-body a {
  color: var(--bright-blue);
}

.article-body code {
  font-family: var(--font-mono);
  font-size: 1.4rem;
  background-color: var(--background-highlight);
  padding: 0 0.4rem;
}

.article-body img {
  max-width: 100%;
}

/* Social icon rows */
.social-icons {
  display: flex;
  flex-direction: row;
  justify-content: center;
  margin: 0.8rem 0 0 0;
  width: 30rem;
}

@media (min-width: 375px) {
  .social-icons {
    width: 35rem;
  }
}

@media (min-width: 768px) {
  .social-icons {
    margin: 1rem 0 0 0;
    width: 96rem;
  }
}

.social-icon {
  width: 24px;
  height: 24px;
  margin: 0 3rem;
  color: var(--highlight);
}

@media (min-width: 980px) {
  .social-icon {
    margin: 0 10rem;
  }
}

.social-icon:hover {
  color: var(--bright-blue);
}

/* Contact page */
.contacts-container {
  width: 100%;
  display: flex;
  flex-direction: column;
  justify-content: center;
  align-items: center;
}

.single-link {
  display: flex;
  flex-direction: column;
  justify-content: center;
  align-items: center;
  margin-bottom: 5rem;
}

.single-link h1 {
  font-family: var(--font-heading);
  font-weight: 300;
  font-size: 2rem;
  margin: 0 0 1rem 0;
}

.contact-icon {
  width: 64px;
  height: 64px;
  color: var(--highlight);
}

.contact-icon:hover {
  color: var(--bright-blue);
}

/* CV page */
.page-prose {
  width: 32rem;
  margin: 3rem auto;
  font-family: var(--font-body);
  font-size: 1.5rem;
  line-height: 2.2rem;
}

@media (min-width: 375px) {
  .page-prose {
    width: 37.5rem;
  }
}

@media (min-width: 768px) {
  .page-prose {
    width: 72rem;
  }
}

@media (min-width: 960px) {
  .page-prose {
    width: 96rem;
  }
}

.page-prose h2 {
  font-family: var(--font-heading);
  font-weight: 500;
  font-size: 2rem;
  margin: 3rem 0 1rem 0;
  color: var(--highlight);
}

.page-prose h3 {
  font-family: var(--font-heading);
  font-weight: 300;
  font-size: 1.7rem;
  margin: 2rem 0 0.5rem 0;
  color: var(--highlight);
}

.page-prose ul {
  margin: 0 0 1.5rem 2rem;
}

.page-prose li {
  margin-bottom: 0.5rem;
}

.personal-statement {
  width: 30rem;
  font-family: var(--font-body);
  margin: 0;
}

.personal-statement p {
  hyphens: none;
  letter-spacing: -0.01rem;
  font-weight: 400;
  font-size: 1.7rem;
  text-align: center;
  line-height: 2.4rem;
  color: var(--highlight);
  margin: 0;
  padding: 0;
}

@media (min-width: 375px) {
  .personal-statement {
    width: 35rem;
  }
}

@media (min-width: 768px) {
  .personal-statement {
    width: 72rem;
  }

  .personal-statement p {
    font-size: 1.8rem;
    line-height: 2.5rem;
  }
}

@media (min-width: 980px) {
  .personal-statement p {
    font-size: 1.9rem;
    line-height: 2.6rem;
  }
}

/* Footer */
.site-footer {
  margin: 0 auto 3rem auto;
  display: flex;
  flex-direction: row;
  justify-content: space-between;
  border-top: solid 1px var(--highlight);
  width: 32rem;
}

.site-footer p {
  font-family: var(--font-heading);
  font-size: 1.1rem;
  margin-top: 0.6rem;
}

@media (min-width: 768px) {
  .site-footer {
    width: 72rem;
  }

  .site-footer p {
    margin: 1rem 0.5rem 0 0.5rem;
    font-size: 1.2rem;
  }
}

@media (min-width: 980px) {
  .site-footer {
    width: 96rem;
  }

  .site-footer p {
    font-size: 1.3rem;
  }
}

/* Not-found page */
.notfound-container {
  width: 100%;
  height: 90vh;
  display: flex;
  flex-direction: column;
  justify-content: center;
  align-items: center;
}

.notfound-message {
  display: flex;
  flex-direction: column;
  justify-content: center;
  align-items: center;
}

@media (min-width: 768px) {
  .notfound-message {
    flex-direction: row;
  }
}

.notfound-logo {
  width: 100px;
  height: 100px;
  margin: 3rem;
}

@media (min-width: 768px) {
  .notfound-logo {
    margin-right: 6rem;
  }
}

.notfound-text {
  margin-top: 1rem;
  width: 90%;
  text-align: center;
  font-family: var(--font-body);
}

.notfound-text h1 {
  font-family: var(--font-heading);
  font-weight: 300;
  font-size: 2.2rem;
}

@media (min-width: 768px) {
  .notfound-text {
    width: 50%;
    text-align: left;
  }
}
"#;
