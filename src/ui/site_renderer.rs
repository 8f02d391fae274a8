use serde::Serialize;
use tera::{Context, Tera};
use crate::errors::{SchoolError, SchoolResult};
use crate::ui::view_models::{CourseListing, CourseOption, FormView, SiteView, ToastView};

const TEMPLATES: [(&str, &str); 6] = [
    ("base.html", include_str!("templates/base.html")),
    ("macros.html", include_str!("templates/macros.html")),
    ("home.html", include_str!("templates/home.html")),
    ("courses.html", include_str!("templates/courses.html")),
    ("enroll.html", include_str!("templates/enroll.html")),
    ("contact.html", include_str!("templates/contact.html")),
];

/// Turns view models into full HTML pages. Rendering never touches the
/// network; callers fetch first and hand over plain data.
pub struct SiteRenderer {
    tera: Tera,
    site: SiteView,
}

impl SiteRenderer {
    pub fn new(site: SiteView) -> SchoolResult<Self> {
        let mut tera = Tera::default();
        tera.add_raw_templates(TEMPLATES.to_vec())?;
        log::debug!("Loaded {} site templates", tera.get_template_names().count());
        Ok(Self { tera, site })
    }

    pub fn render_home(&self, featured: &CourseListing, toast: Option<&ToastView>) -> SchoolResult<String> {
        let mut context = self.context(toast);
        context.insert("featured", featured);
        self.render("home.html", &context)
    }

    pub fn render_courses(&self, listing: &CourseListing, toast: Option<&ToastView>) -> SchoolResult<String> {
        let mut context = self.context(toast);
        context.insert("listing", listing);
        self.render("courses.html", &context)
    }

    pub fn render_enroll(&self, form: &FormView, options: &[CourseOption], toast: Option<&ToastView>) -> SchoolResult<String> {
        let mut context = self.context(toast);
        context.insert("form", form);
        context.insert("options", options);
        self.render("enroll.html", &context)
    }

    pub fn render_contact(&self, form: &FormView, toast: Option<&ToastView>) -> SchoolResult<String> {
        let mut context = self.context(toast);
        context.insert("form", form);
        self.render("contact.html", &context)
    }

    fn context(&self, toast: Option<&ToastView>) -> Context {
        let mut context = Context::new();
        context.insert("site", &self.site);
        insert_optional(&mut context, "toast", toast);
        context
    }

    fn render(&self, template: &str, context: &Context) -> SchoolResult<String> {
        self.tera
            .render(template, context)
            .map_err(|e| SchoolError::render_error(template, &e.to_string()))
    }
}

fn insert_optional<T: Serialize>(context: &mut Context, key: &str, value: Option<&T>) {
    match value {
        Some(value) => context.insert(key, value),
        None => context.insert(key, &false),
    }
}
