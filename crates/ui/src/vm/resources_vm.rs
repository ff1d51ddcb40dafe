use mentor_core::model::Resource;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResourceVm {
    pub kind: String,
    /// Numbered title, e.g. "1. The Rust Book".
    pub title: String,
    pub description: String,
    pub why_useful: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResourcesVm {
    pub header: String,
    pub items: Vec<ResourceVm>,
}

#[must_use]
pub fn map_resources(resources: &[Resource]) -> ResourcesVm {
    let items = resources
        .iter()
        .enumerate()
        .map(|(index, resource)| {
            let title = if resource.title.is_empty() {
                "Sans titre"
            } else {
                resource.title.as_str()
            };
            ResourceVm {
                kind: if resource.kind.is_empty() {
                    "Ressource".to_string()
                } else {
                    resource.kind.clone()
                },
                title: format!("{}. {title}", index + 1),
                description: if resource.description.is_empty() {
                    "Pas de description".to_string()
                } else {
                    resource.description.clone()
                },
                why_useful: if resource.why_useful.is_empty() {
                    "Ressource utile pour approfondir".to_string()
                } else {
                    resource.why_useful.clone()
                },
            }
        })
        .collect::<Vec<_>>();

    ResourcesVm {
        header: format!("{} ressources éducatives recommandées:", items.len()),
        items,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn items_are_numbered_in_order() {
        let resources = vec![
            Resource {
                kind: "Livre".into(),
                title: "The Rust Book".into(),
                description: "Introduction officielle.".into(),
                why_useful: "Couvre les bases.".into(),
            },
            Resource {
                kind: "Vidéo".into(),
                title: "Cours en ligne".into(),
                description: "Série de tutoriels.".into(),
                why_useful: "Progression guidée.".into(),
            },
        ];
        let vm = map_resources(&resources);
        assert_eq!(vm.header, "2 ressources éducatives recommandées:");
        assert_eq!(vm.items[0].title, "1. The Rust Book");
        assert_eq!(vm.items[1].title, "2. Cours en ligne");
        assert_eq!(vm.items[1].kind, "Vidéo");
    }

    #[test]
    fn blank_fields_fall_back_to_placeholders() {
        let vm = map_resources(&[Resource {
            kind: String::new(),
            title: String::new(),
            description: String::new(),
            why_useful: String::new(),
        }]);
        let item = &vm.items[0];
        assert_eq!(item.kind, "Ressource");
        assert_eq!(item.title, "1. Sans titre");
        assert_eq!(item.description, "Pas de description");
        assert_eq!(item.why_useful, "Ressource utile pour approfondir");
    }
}
