/// Which collection the listing section shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tab {
    #[default]
    Projects,
    Blog,
}

impl Tab {
    pub const ALL: [Tab; 2] = [Tab::Projects, Tab::Blog];

    pub fn value(&self) -> &'static str {
        match self {
            Self::Projects => "projects",
            Self::Blog => "blog",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Projects => "Projects",
            Self::Blog => "Blog",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tab_is_projects() {
        assert_eq!(Tab::default(), Tab::Projects);
    }

    #[test]
    fn test_tabs_are_distinct() {
        let [projects, blog] = Tab::ALL;
        assert_ne!(projects.value(), blog.value());
        assert_eq!(blog.label(), "Blog");
    }
}
