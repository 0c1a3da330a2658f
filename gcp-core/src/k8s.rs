use kube::Resource;
use kube::ResourceExt;

pub trait KubeResourceExt {
    fn namespaced_name(&self) -> String;
}

impl<T: Resource> KubeResourceExt for T {
    fn namespaced_name(&self) -> String {
        match self.namespace() {
            Some(ns) => format!("{}/{}", ns, self.name_any()),
            None => self.name_any(),
        }
    }
}
