mod batch {

    use std::io::Write;
    use std::sync::{Arc, Mutex};

    use serde_json::{json, Value};
    use tracing_subscriber::fmt::MakeWriter;

    use k8_entity::k8_types::core::pod::PodSpec;
    use k8_entity::k8_types::networking::ingress_v1beta1::IngressSpec;
    use k8_entity::k8_types::{Int32OrString, K8List};
    use k8_entity::pod::Pod;
    use k8_entity::readiness::ready_groups;
    use k8_entity::route::Route;
    use k8_entity::{guard, recover, translate_batch, TranslateError};

    const INGRESS_LIST: &str = include_str!("fixtures/ingress_list.json");
    const POD_LIST: &str = include_str!("fixtures/pod_list.json");

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Captured {
        fn text(&self) -> String {
            let bytes = self.0.lock().map(|bytes| bytes.clone()).unwrap_or_default();
            String::from_utf8_lossy(&bytes).into_owned()
        }
    }

    impl Write for Captured {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            if let Ok(mut bytes) = self.0.lock() {
                bytes.extend_from_slice(buf);
            }
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for Captured {
        type Writer = Captured;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    fn with_captured_logs<F: FnOnce()>(run: F) -> String {
        let captured = Captured::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(captured.clone())
            .with_max_level(tracing::Level::TRACE)
            .with_ansi(false)
            .finish();
        tracing::subscriber::with_default(subscriber, run);
        captured.text()
    }

    #[test]
    fn test_ingress_list_partial_tolerance() {
        let list: K8List<IngressSpec> = serde_json::from_str(INGRESS_LIST).expect("ingress list");

        let mut result = None;
        let logs = with_captured_logs(|| {
            result = Some(Route::collect_ingresses_v1beta1(&list.items));
        });
        let result = result.expect("batch ran");

        let names: Vec<_> = result
            .items
            .iter()
            .map(|route| route.metadata.name.as_str())
            .collect();
        assert_eq!(names, vec!["storefront", "admin"]);
        assert_eq!(result.rejected.len(), 1);
        assert!(result.rejected.contains("default-backend"));

        assert_eq!(
            result.items[1].spec.port.target_port,
            Int32OrString::String("https".to_owned())
        );
        assert_eq!(result.items[1].spec.path_type.as_deref(), Some("Prefix"));
        assert_eq!(result.items[1].spec.ingress_class_name.as_deref(), Some("internal"));

        assert!(logs.contains("rejecting item"));
        assert!(logs.contains("default-backend"));
    }

    #[test]
    fn test_unstructured_routes() {
        let routes = vec![
            json!({
                "metadata": { "name": "good", "generation": 3.0, "annotations": { "weight": 10 } },
                "spec": { "host": "good.example.com", "to": { "kind": "Service", "name": "good" } }
            }),
            json!({ "metadata": { "namespace": "nameless" }, "spec": {} }),
            json!({ "metadata": { "name": "typo" }, "spec": { "port": { "targetPort": [] } } }),
        ];

        let result = Route::collect_unstructured(&routes);
        assert_eq!(result.items.len(), 1);
        assert_eq!(result.items[0].metadata.generation, 3);
        assert_eq!(
            result.items[0].metadata.annotations.get("weight").map(String::as_str),
            Some("10")
        );
        assert_eq!(result.rejected.len(), 2);
        assert!(result.rejected.contains("#1"));
        assert!(result.rejected.contains("typo"));
    }

    #[test]
    fn test_reverse_batch() {
        let list: K8List<IngressSpec> = serde_json::from_str(INGRESS_LIST).expect("ingress list");
        let routes = Route::collect_ingresses_v1beta1(&list.items).into_items();

        let result = translate_batch(&routes, Route::to_ingress);
        assert!(result.is_complete());
        assert_eq!(result.items.len(), 2);
        assert_eq!(result.items[0].kind, "Ingress");
    }

    #[test]
    fn test_ready_groups() {
        let list: K8List<PodSpec> = serde_json::from_str(POD_LIST).expect("pod list");

        let logs = with_captured_logs(|| {
            let groups = ready_groups(&list.items, "statefulset");
            let keys: Vec<_> = groups.keys().map(String::as_str).collect();
            assert_eq!(keys, vec!["zookeeper"]);
        });
        assert!(logs.contains("withholding group"));

        let pods = Pod::collect_pods(&list.items);
        assert_eq!(pods.items.len(), 3);
        assert!(pods.rejected.contains("broken-0"));
    }

    #[test]
    fn test_shim_degrades_to_none() {
        let route = Route::from_unstructured(&json!({
            "metadata": { "name": "storefront" },
            "spec": { "host": "storefront.example.com", "to": { "name": "storefront" } }
        }))
        .expect("route");

        let logs = with_captured_logs(|| {
            assert!(recover("storefront", route.to_openshift()).is_some());

            let failed: Option<Value> = recover(
                "storefront",
                Err(TranslateError::MissingField("spec.rules")),
            );
            assert!(failed.is_none());

            let panicked: Option<Value> = guard("storefront", || {
                let rules: Vec<Value> = vec![];
                Ok(rules[0].clone())
            });
            assert!(panicked.is_none());

            let explicit: Option<Value> =
                guard("checkout", || panic!("dereferenced absent field"));
            assert!(explicit.is_none());
        });

        assert!(logs.contains("storefront"));
        assert!(logs.contains("spec.rules"));
        assert!(logs.contains("recovered from translation panic"));
        assert!(logs.contains("index out of bounds"));
        assert!(logs.contains("checkout"));
        assert!(logs.contains("dereferenced absent field"));
        assert!(logs.contains("batch.rs"));
    }
}
