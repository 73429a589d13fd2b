use serde::Deserialize;
use serde::Serialize;

use crate::{Crd, CrdNames, DefaultHeader, Spec, Status};

const PROJECT_API: Crd = Crd {
    group: "project.openshift.io",
    version: "v1",
    names: CrdNames {
        kind: "Project",
        plural: "projects",
        singular: "project",
    },
};

#[derive(Deserialize, Serialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectSpec {
    pub finalizers: Vec<String>,
}

impl Spec for ProjectSpec {
    type Status = ProjectStatus;
    type Header = DefaultHeader;
    const NAME_SPACED: bool = false;

    fn metadata() -> &'static Crd {
        &PROJECT_API
    }
}

#[derive(Deserialize, Serialize, Eq, PartialEq, Debug, Default, Clone)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectStatus {
    pub phase: String,
}

impl Status for ProjectStatus {}
