//! Bodies for the v2 layout.

pub(super) const MAIN: &str = r#"{{BOILERPLATE}}package main

import (
	"flag"
	"os"

	"k8s.io/apimachinery/pkg/runtime"
	clientgoscheme "k8s.io/client-go/kubernetes/scheme"
	_ "k8s.io/client-go/plugin/pkg/client/auth/gcp"
	ctrl "sigs.k8s.io/controller-runtime"
	"sigs.k8s.io/controller-runtime/pkg/log/zap"
	// +kubebuilder:scaffold:imports
)

var (
	scheme   = runtime.NewScheme()
	setupLog = ctrl.Log.WithName("setup")
)

func init() {
	_ = clientgoscheme.AddToScheme(scheme)

	// +kubebuilder:scaffold:scheme
}

func main() {
	var metricsAddr string
	var enableLeaderElection bool
	flag.StringVar(&metricsAddr, "metrics-addr", ":8080", "The address the metric endpoint binds to.")
	flag.BoolVar(&enableLeaderElection, "enable-leader-election", false,
		"Enable leader election for controller manager. "+
			"Enabling this will ensure there is only one active controller manager.")
	flag.Parse()

	ctrl.SetLogger(zap.New(zap.UseDevMode(true)))

	mgr, err := ctrl.NewManager(ctrl.GetConfigOrDie(), ctrl.Options{
		Scheme:             scheme,
		MetricsBindAddress: metricsAddr,
		LeaderElection:     enableLeaderElection,
		Port:               9443,
	})
	if err != nil {
		setupLog.Error(err, "unable to start manager")
		os.Exit(1)
	}

	// +kubebuilder:scaffold:builder

	setupLog.Info("starting manager")
	if err := mgr.Start(ctrl.SetupSignalHandler()); err != nil {
		setupLog.Error(err, "problem running manager")
		os.Exit(1)
	}
}
"#;

pub(super) const TYPES: &str = r#"{{BOILERPLATE}}package {{VERSION}}

import (
	metav1 "k8s.io/apimachinery/pkg/apis/meta/v1"
)

// EDIT THIS FILE!  THIS IS SCAFFOLDING FOR YOU TO OWN!
// NOTE: json tags are required.  Any new fields you add must have json tags for the fields to be serialized.

// {{KIND}}Spec defines the desired state of {{KIND}}
type {{KIND}}Spec struct {
	// INSERT ADDITIONAL SPEC FIELDS - desired state of cluster
	// Important: Run "make" to regenerate code after modifying this file

	// Foo is an example field of {{KIND}}. Edit {{KIND_LOWER}}_types.go to remove/update
	Foo string `json:"foo,omitempty"`
}

// {{KIND}}Status defines the observed state of {{KIND}}
type {{KIND}}Status struct {
	// INSERT ADDITIONAL STATUS FIELD - define observed state of cluster
	// Important: Run "make" to regenerate code after modifying this file
}

// +kubebuilder:object:root=true
{{SCOPE_MARKER}}// +kubebuilder:subresource:status

// {{KIND}} is the Schema for the {{KIND_PLURAL}} API
type {{KIND}} struct {
	metav1.TypeMeta   `json:",inline"`
	metav1.ObjectMeta `json:"metadata,omitempty"`

	Spec   {{KIND}}Spec   `json:"spec,omitempty"`
	Status {{KIND}}Status `json:"status,omitempty"`
}

// +kubebuilder:object:root=true

// {{KIND}}List contains a list of {{KIND}}
type {{KIND}}List struct {
	metav1.TypeMeta `json:",inline"`
	metav1.ListMeta `json:"metadata,omitempty"`
	Items           []{{KIND}} `json:"items"`
}

func init() {
	SchemeBuilder.Register(&{{KIND}}{}, &{{KIND}}List{})
}
"#;

pub(super) const GROUP_VERSION_INFO: &str = r#"{{BOILERPLATE}}// Package {{VERSION}} contains API Schema definitions for the {{GROUP}} {{VERSION}} API group
// +kubebuilder:object:generate=true
// +groupName={{GROUP_DOMAIN}}
package {{VERSION}}

import (
	"k8s.io/apimachinery/pkg/runtime/schema"
	"sigs.k8s.io/controller-runtime/pkg/scheme"
)

var (
	// GroupVersion is group version used to register these objects
	GroupVersion = schema.GroupVersion{Group: "{{GROUP_DOMAIN}}", Version: "{{VERSION}}"}

	// SchemeBuilder is used to add go types to the GroupVersionKind scheme
	SchemeBuilder = &scheme.Builder{GroupVersion: GroupVersion}

	// AddToScheme adds the types in this group-version to the given scheme.
	AddToScheme = SchemeBuilder.AddToScheme
)
"#;

pub(super) const CRD_SAMPLE: &str = r#"apiVersion: {{GROUP_DOMAIN}}/{{VERSION}}
kind: {{KIND}}
metadata:
  name: {{KIND_LOWER}}-sample
spec:
  # Add fields here
  foo: bar
"#;

pub(super) const CRD_EDITOR_ROLE: &str = r#"# permissions for end users to edit {{KIND_PLURAL}}.
apiVersion: rbac.authorization.k8s.io/v1
kind: ClusterRole
metadata:
  name: {{KIND_LOWER}}-editor-role
rules:
- apiGroups:
  - {{GROUP_DOMAIN}}
  resources:
  - {{KIND_PLURAL}}
  verbs:
  - create
  - delete
  - get
  - list
  - patch
  - update
  - watch
- apiGroups:
  - {{GROUP_DOMAIN}}
  resources:
  - {{KIND_PLURAL}}/status
  verbs:
  - get
"#;

pub(super) const CRD_VIEWER_ROLE: &str = r#"# permissions for end users to view {{KIND_PLURAL}}.
apiVersion: rbac.authorization.k8s.io/v1
kind: ClusterRole
metadata:
  name: {{KIND_LOWER}}-viewer-role
rules:
- apiGroups:
  - {{GROUP_DOMAIN}}
  resources:
  - {{KIND_PLURAL}}
  verbs:
  - get
  - list
  - watch
- apiGroups:
  - {{GROUP_DOMAIN}}
  resources:
  - {{KIND_PLURAL}}/status
  verbs:
  - get
"#;

pub(super) const ENABLE_WEBHOOK_PATCH: &str = r#"# The following patch enables conversion webhook for CRD
# CRD conversion requires k8s 1.13 or later.
apiVersion: apiextensions.k8s.io/v1beta1
kind: CustomResourceDefinition
metadata:
  name: {{KIND_PLURAL}}.{{GROUP_DOMAIN}}
spec:
  conversion:
    strategy: Webhook
    webhookClientConfig:
      # this is "\n" used as a placeholder, otherwise it will be rejected by the apiserver for being blank,
      # but we're going to set it later using the cert-manager (or potentially a patch if not using cert-manager)
      caBundle: Cg==
      service:
        namespace: system
        name: webhook-service
        path: /convert
"#;

pub(super) const ENABLE_CAINJECTION_PATCH: &str = r#"# The following patch adds a directive for certmanager to inject CA into the CRD
# CRD conversion requires k8s 1.13 or later.
apiVersion: apiextensions.k8s.io/v1beta1
kind: CustomResourceDefinition
metadata:
  annotations:
    cert-manager.io/inject-ca-from: $(CERTIFICATE_NAMESPACE)/$(CERTIFICATE_NAME)
  name: {{KIND_PLURAL}}.{{GROUP_DOMAIN}}
"#;

pub(super) const CRD_KUSTOMIZATION: &str = r#"# This kustomization.yaml is not intended to be run by itself,
# since it depends on service name and namespace that are out of this kubebuilder project.
# It should be run by config/default
resources:
# +kubebuilder:scaffold:crdkustomizeresource

patchesStrategicMerge:
# [WEBHOOK] To enable webhook, uncomment all the sections with [WEBHOOK] prefix.
# patches here are for enabling the conversion webhook for each CRD
# +kubebuilder:scaffold:crdkustomizewebhookpatch

# [CERTMANAGER] To enable webhook, uncomment all the sections with [CERTMANAGER] prefix.
# patches here are for enabling the CA injection for each CRD
# +kubebuilder:scaffold:crdkustomizecainjectionpatch

# the following config is for teaching kustomize how to do kustomization for CRDs.
configurations:
- kustomizeconfig.yaml
"#;

pub(super) const KUSTOMIZE_CONFIG: &str = r#"# This file is for teaching kustomize how to substitute name and namespace reference in CRD
nameReference:
- kind: Service
  version: v1
  fieldSpecs:
  - kind: CustomResourceDefinition
    group: apiextensions.k8s.io
    path: spec/conversion/webhookClientConfig/service/name

namespace:
- kind: CustomResourceDefinition
  group: apiextensions.k8s.io
  path: spec/conversion/webhookClientConfig/service/namespace
  create: false

varReference:
- path: metadata/annotations
"#;

pub(super) const SUITE_TEST: &str = r#"{{BOILERPLATE}}package {{CONTROLLERS_PACKAGE}}

import (
	"path/filepath"
	"testing"

	. "github.com/onsi/ginkgo"
	. "github.com/onsi/gomega"
	"k8s.io/client-go/kubernetes/scheme"
	"k8s.io/client-go/rest"
	"sigs.k8s.io/controller-runtime/pkg/client"
	"sigs.k8s.io/controller-runtime/pkg/envtest"
	"sigs.k8s.io/controller-runtime/pkg/envtest/printer"
	logf "sigs.k8s.io/controller-runtime/pkg/log"
	"sigs.k8s.io/controller-runtime/pkg/log/zap"
	// +kubebuilder:scaffold:imports
)

// These tests use Ginkgo (BDD-style Go testing framework). Refer to
// http://onsi.github.io/ginkgo/ to learn more about Ginkgo.

var cfg *rest.Config
var k8sClient client.Client
var testEnv *envtest.Environment

func TestAPIs(t *testing.T) {
	RegisterFailHandler(Fail)

	RunSpecsWithDefaultAndCustomReporters(t,
		"Controller Suite",
		[]Reporter{printer.NewlineReporter{}})
}

var _ = BeforeSuite(func(done Done) {
	logf.SetLogger(zap.LoggerTo(GinkgoWriter, true))

	By("bootstrapping test environment")
	testEnv = &envtest.Environment{
		CRDDirectoryPaths: {{CRD_BASES}},
	}

	var err error
	cfg, err = testEnv.Start()
	Expect(err).ToNot(HaveOccurred())
	Expect(cfg).ToNot(BeNil())

	// +kubebuilder:scaffold:scheme

	k8sClient, err = client.New(cfg, client.Options{Scheme: scheme.Scheme})
	Expect(err).ToNot(HaveOccurred())
	Expect(k8sClient).ToNot(BeNil())

	close(done)
}, 60)

var _ = AfterSuite(func() {
	By("tearing down the test environment")
	err := testEnv.Stop()
	Expect(err).ToNot(HaveOccurred())
})
"#;

pub(super) const CONTROLLER: &str = r#"{{BOILERPLATE}}package {{CONTROLLERS_PACKAGE}}

import (
	"context"

	"github.com/go-logr/logr"
	"k8s.io/apimachinery/pkg/runtime"
	ctrl "sigs.k8s.io/controller-runtime"
	"sigs.k8s.io/controller-runtime/pkg/client"

	{{IMPORT_ALIAS}} "{{API_IMPORT_PATH}}"
)

// {{KIND}}Reconciler reconciles a {{KIND}} object
type {{KIND}}Reconciler struct {
	client.Client
	Log    logr.Logger
	Scheme *runtime.Scheme
}

// +kubebuilder:rbac:groups={{GROUP_DOMAIN}},resources={{KIND_PLURAL}},verbs=get;list;watch;create;update;patch;delete
// +kubebuilder:rbac:groups={{GROUP_DOMAIN}},resources={{KIND_PLURAL}}/status,verbs=get;update;patch

func (r *{{KIND}}Reconciler) Reconcile(req ctrl.Request) (ctrl.Result, error) {
{{RECONCILE_BODY}}}

func (r *{{KIND}}Reconciler) SetupWithManager(mgr ctrl.Manager) error {
	return ctrl.NewControllerManagedBy(mgr).
		For(&{{IMPORT_ALIAS}}.{{KIND}}{}).
		Complete(r)
}
"#;

pub(super) const RECONCILE_EXAMPLE: &str = r#"	ctx := context.Background()
	log := r.Log.WithValues("{{KIND_LOWER}}", req.NamespacedName)

	var instance {{IMPORT_ALIAS}}.{{KIND}}
	if err := r.Get(ctx, req.NamespacedName, &instance); err != nil {
		// Deleted objects are not an error; nothing to requeue.
		return ctrl.Result{}, client.IgnoreNotFound(err)
	}

	log.V(1).Info("reconciling", "generation", instance.Generation)

	return ctrl.Result{}, nil
"#;

pub(super) const RECONCILE_STUB: &str = r#"	_ = context.Background()
	_ = r.Log.WithValues("{{KIND_LOWER}}", req.NamespacedName)

	// your logic here

	return ctrl.Result{}, nil
"#;
