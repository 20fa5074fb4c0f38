//! Bodies for the v1 layout: `pkg/apis` and `pkg/controller` trees wired
//! through package-level registration lists.

pub(super) const MAIN: &str = r#"{{BOILERPLATE}}package main

import (
	"flag"
	"os"

	"{{REPO}}/pkg/apis"
	"{{REPO}}/pkg/controller"
	_ "k8s.io/client-go/plugin/pkg/client/auth/gcp"
	"sigs.k8s.io/controller-runtime/pkg/client/config"
	"sigs.k8s.io/controller-runtime/pkg/manager"
	logf "sigs.k8s.io/controller-runtime/pkg/runtime/log"
	"sigs.k8s.io/controller-runtime/pkg/runtime/signals"
)

func main() {
	var metricsAddr string
	flag.StringVar(&metricsAddr, "metrics-addr", ":8080", "The address the metric endpoint binds to.")
	flag.Parse()
	logf.SetLogger(logf.ZapLogger(false))
	log := logf.Log.WithName("entrypoint")

	// Get a config to talk to the apiserver
	log.Info("setting up client for manager")
	cfg, err := config.GetConfig()
	if err != nil {
		log.Error(err, "unable to set up client config")
		os.Exit(1)
	}

	// Create a new Cmd to provide shared dependencies and start components
	log.Info("setting up manager")
	mgr, err := manager.New(cfg, manager.Options{MetricsBindAddress: metricsAddr})
	if err != nil {
		log.Error(err, "unable to set up overall controller manager")
		os.Exit(1)
	}

	log.Info("Registering Components.")

	// Setup Scheme for all resources
	log.Info("setting up scheme")
	if err := apis.AddToScheme(mgr.GetScheme()); err != nil {
		log.Error(err, "unable add APIs to scheme")
		os.Exit(1)
	}

	// Setup all Controllers
	log.Info("Setting up controller")
	if err := controller.AddToManager(mgr); err != nil {
		log.Error(err, "unable to register controllers to the manager")
		os.Exit(1)
	}

	// Start the Cmd
	log.Info("Starting the Cmd.")
	if err := mgr.Start(signals.SetupSignalHandler()); err != nil {
		log.Error(err, "unable to run the manager")
		os.Exit(1)
	}
}
"#;

pub(super) const APIS: &str = r#"{{BOILERPLATE}}// Generate deepcopy for apis
//go:generate go run ../../vendor/k8s.io/code-generator/cmd/deepcopy-gen/main.go -O zz_generated.deepcopy -i ./... -h ../../hack/boilerplate.go.txt

// Package apis contains Kubernetes API groups.
package apis

import (
	"k8s.io/apimachinery/pkg/runtime"
)

// AddToSchemes may be used to add all resources defined in the project to a Scheme
var AddToSchemes runtime.SchemeBuilder

// AddToScheme adds all Resources to the Scheme
func AddToScheme(s *runtime.Scheme) error {
	return AddToSchemes.AddToScheme(s)
}
"#;

pub(super) const CONTROLLER_ROOT: &str = r#"{{BOILERPLATE}}package controller

import (
	"sigs.k8s.io/controller-runtime/pkg/manager"
)

// AddToManagerFuncs is a list of functions to add all Controllers to the Manager
var AddToManagerFuncs []func(manager.Manager) error

// AddToManager adds all Controllers to the Manager
func AddToManager(m manager.Manager) error {
	for _, f := range AddToManagerFuncs {
		if err := f(m); err != nil {
			return err
		}
	}
	return nil
}
"#;

pub(super) const REGISTER: &str = r#"{{BOILERPLATE}}// NOTE: Boilerplate only.  Ignore this file.

// Package {{VERSION}} contains API Schema definitions for the {{GROUP}} {{VERSION}} API group
// +k8s:openapi-gen=true
// +k8s:deepcopy-gen=package,register
// +k8s:conversion-gen={{REPO}}/pkg/apis/{{GROUP}}
// +k8s:defaulter-gen=TypeMeta
// +groupName={{GROUP_DOMAIN}}
package {{VERSION}}

import (
	"k8s.io/apimachinery/pkg/runtime/schema"
	"sigs.k8s.io/controller-runtime/pkg/runtime/scheme"
)

var (
	// SchemeGroupVersion is group version used to register these objects
	SchemeGroupVersion = schema.GroupVersion{Group: "{{GROUP_DOMAIN}}", Version: "{{VERSION}}"}

	// SchemeBuilder is used to add go types to the GroupVersionKind scheme
	SchemeBuilder = &scheme.Builder{GroupVersion: SchemeGroupVersion}

	// AddToScheme is required by pkg/client/...
	AddToScheme = SchemeBuilder.AddToScheme
)

// Resource is required by pkg/client/listers/...
func Resource(resource string) schema.GroupResource {
	return SchemeGroupVersion.WithResource(resource).GroupResource()
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
}

// {{KIND}}Status defines the observed state of {{KIND}}
type {{KIND}}Status struct {
	// INSERT ADDITIONAL STATUS FIELD - define observed state of cluster
	// Important: Run "make" to regenerate code after modifying this file
}

// +genclient
{{SCOPE_MARKER}}// +k8s:deepcopy-gen:interfaces=k8s.io/apimachinery/pkg/runtime.Object

// {{KIND}} is the Schema for the {{KIND_PLURAL}} API
// +k8s:openapi-gen=true
// +kubebuilder:subresource:status
type {{KIND}} struct {
	metav1.TypeMeta   `json:",inline"`
	metav1.ObjectMeta `json:"metadata,omitempty"`

	Spec   {{KIND}}Spec   `json:"spec,omitempty"`
	Status {{KIND}}Status `json:"status,omitempty"`
}

// +k8s:deepcopy-gen:interfaces=k8s.io/apimachinery/pkg/runtime.Object

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

pub(super) const VERSION_SUITE_TEST: &str = r#"{{BOILERPLATE}}package {{VERSION}}

import (
	"log"
	"os"
	"path/filepath"
	"testing"

	"k8s.io/client-go/kubernetes/scheme"
	"k8s.io/client-go/rest"
	"sigs.k8s.io/controller-runtime/pkg/client"
	"sigs.k8s.io/controller-runtime/pkg/envtest"
)

var cfg *rest.Config
var c client.Client

func TestMain(m *testing.M) {
	t := &envtest.Environment{
		CRDDirectoryPaths: []string{filepath.Join("..", "..", "..", "..", "config", "crds")},
	}

	err := SchemeBuilder.AddToScheme(scheme.Scheme)
	if err != nil {
		log.Fatal(err)
	}

	if cfg, err = t.Start(); err != nil {
		log.Fatal(err)
	}

	if c, err = client.New(cfg, client.Options{Scheme: scheme.Scheme}); err != nil {
		log.Fatal(err)
	}

	code := m.Run()
	t.Stop()
	os.Exit(code)
}
"#;

pub(super) const TYPES_TEST: &str = r#"{{BOILERPLATE}}package {{VERSION}}

import (
	"testing"

	"github.com/onsi/gomega"
	"golang.org/x/net/context"
	metav1 "k8s.io/apimachinery/pkg/apis/meta/v1"
	"k8s.io/apimachinery/pkg/types"
)

func TestStorage{{KIND}}(t *testing.T) {
	key := types.NamespacedName{
		Name:      "foo",
		Namespace: "default",
	}
	created := &{{KIND}}{
		ObjectMeta: metav1.ObjectMeta{
			Name:      "foo",
			Namespace: "default",
		}}
	g := gomega.NewGomegaWithT(t)

	// Test Create
	fetched := &{{KIND}}{}
	g.Expect(c.Create(context.TODO(), created)).To(gomega.Succeed())

	g.Expect(c.Get(context.TODO(), key, fetched)).To(gomega.Succeed())
	g.Expect(fetched).To(gomega.Equal(created))

	// Test Updating the Labels
	updated := fetched.DeepCopy()
	updated.Labels = map[string]string{"hello": "world"}
	g.Expect(c.Update(context.TODO(), updated)).To(gomega.Succeed())

	g.Expect(c.Get(context.TODO(), key, fetched)).To(gomega.Succeed())
	g.Expect(fetched).To(gomega.Equal(updated))

	// Test Delete
	g.Expect(c.Delete(context.TODO(), fetched)).To(gomega.Succeed())
	g.Expect(c.Get(context.TODO(), key, fetched)).ToNot(gomega.Succeed())
}
"#;

pub(super) const DOC: &str = r#"{{BOILERPLATE}}// Package {{VERSION}} contains API Schema definitions for the {{GROUP}} {{VERSION}} API group
// +k8s:openapi-gen=true
// +k8s:deepcopy-gen=package,register
// +k8s:conversion-gen={{REPO}}/pkg/apis/{{GROUP}}
// +k8s:defaulter-gen=TypeMeta
// +groupName={{GROUP_DOMAIN}}
package {{VERSION}}
"#;

pub(super) const GROUP: &str = r#"{{BOILERPLATE}}// Package {{GROUP}} contains {{GROUP}} API versions
package {{GROUP}}
"#;

pub(super) const ADD_TO_SCHEME: &str = r#"{{BOILERPLATE}}package apis

import (
	"{{API_IMPORT_PATH}}"
)

func init() {
	// Register the types with the Scheme so the components can map objects to GroupVersionKinds and back
	AddToSchemes = append(AddToSchemes, {{VERSION}}.SchemeBuilder.AddToScheme)
}
"#;

pub(super) const CRD_SAMPLE: &str = r#"apiVersion: {{GROUP_DOMAIN}}/{{VERSION}}
kind: {{KIND}}
metadata:
  labels:
    controller-tools.k8s.io: "1.0"
  name: {{KIND_LOWER}}-sample
spec:
  # Add fields here
  foo: bar
"#;

pub(super) const CONTROLLER: &str = r#"{{BOILERPLATE}}package {{CONTROLLERS_PACKAGE}}

import (
	"context"

	{{IMPORT_ALIAS}} "{{API_IMPORT_PATH}}"
	"k8s.io/apimachinery/pkg/api/errors"
	"k8s.io/apimachinery/pkg/runtime"
	"sigs.k8s.io/controller-runtime/pkg/client"
	"sigs.k8s.io/controller-runtime/pkg/controller"
	"sigs.k8s.io/controller-runtime/pkg/handler"
	"sigs.k8s.io/controller-runtime/pkg/manager"
	"sigs.k8s.io/controller-runtime/pkg/reconcile"
	logf "sigs.k8s.io/controller-runtime/pkg/runtime/log"
	"sigs.k8s.io/controller-runtime/pkg/source"
)

var log = logf.Log.WithName("{{KIND_LOWER}}-controller")

// Add creates a new {{KIND}} Controller and adds it to the Manager with default RBAC. The Manager will set fields on the Controller
// and Start it when the Manager is Started.
func Add(mgr manager.Manager) error {
	return add(mgr, newReconciler(mgr))
}

// newReconciler returns a new reconcile.Reconciler
func newReconciler(mgr manager.Manager) reconcile.Reconciler {
	return &Reconcile{{KIND}}{Client: mgr.GetClient(), scheme: mgr.GetScheme()}
}

// add adds a new Controller to mgr with r as the reconcile.Reconciler
func add(mgr manager.Manager, r reconcile.Reconciler) error {
	// Create a new controller
	c, err := controller.New("{{KIND_LOWER}}-controller", mgr, controller.Options{Reconciler: r})
	if err != nil {
		return err
	}

	// Watch for changes to {{KIND}}
	return c.Watch(&source.Kind{Type: &{{IMPORT_ALIAS}}.{{KIND}}{}}, &handler.EnqueueRequestForObject{})
}

var _ reconcile.Reconciler = &Reconcile{{KIND}}{}

// Reconcile{{KIND}} reconciles a {{KIND}} object
type Reconcile{{KIND}} struct {
	client.Client
	scheme *runtime.Scheme
}

// Reconcile reads that state of the cluster for a {{KIND}} object and makes changes based on the state read
// +kubebuilder:rbac:groups={{GROUP_DOMAIN}},resources={{KIND_PLURAL}},verbs=get;list;watch;create;update;patch;delete
// +kubebuilder:rbac:groups={{GROUP_DOMAIN}},resources={{KIND_PLURAL}}/status,verbs=get;update;patch
func (r *Reconcile{{KIND}}) Reconcile(request reconcile.Request) (reconcile.Result, error) {
{{RECONCILE_BODY}}}
"#;

pub(super) const RECONCILE_EXAMPLE: &str = r#"	log.Info("Reconciling {{KIND}}", "namespace", request.Namespace, "name", request.Name)

	// Fetch the {{KIND}} instance
	instance := &{{IMPORT_ALIAS}}.{{KIND}}{}
	err := r.Get(context.TODO(), request.NamespacedName, instance)
	if err != nil {
		if errors.IsNotFound(err) {
			// Object not found, return.  Created objects are automatically garbage collected.
			// For additional cleanup logic use finalizers.
			return reconcile.Result{}, nil
		}
		// Error reading the object - requeue the request.
		return reconcile.Result{}, err
	}

	// Compare instance.Spec with the cluster state here and apply any changes.
	log.Info("Observed {{KIND}}", "generation", instance.Generation)

	return reconcile.Result{}, nil
"#;

pub(super) const RECONCILE_STUB: &str = r#"	// Fetch the {{KIND}} instance
	instance := &{{IMPORT_ALIAS}}.{{KIND}}{}
	err := r.Get(context.TODO(), request.NamespacedName, instance)
	if err != nil {
		if errors.IsNotFound(err) {
			return reconcile.Result{}, nil
		}
		return reconcile.Result{}, err
	}

	return reconcile.Result{}, nil
"#;

pub(super) const ADD_CONTROLLER: &str = r#"{{BOILERPLATE}}package controller

import (
	"{{CONTROLLERS_IMPORT_PATH}}"
)

func init() {
	// AddToManagerFuncs is a list of functions to create controllers and add them to a manager.
	AddToManagerFuncs = append(AddToManagerFuncs, {{CONTROLLERS_PACKAGE}}.Add)
}
"#;

pub(super) const CONTROLLER_TEST: &str = r#"{{BOILERPLATE}}package {{CONTROLLERS_PACKAGE}}

import (
	"testing"
	"time"

	{{IMPORT_ALIAS}} "{{API_IMPORT_PATH}}"
	"github.com/onsi/gomega"
	"golang.org/x/net/context"
	metav1 "k8s.io/apimachinery/pkg/apis/meta/v1"
	"k8s.io/apimachinery/pkg/types"
	"sigs.k8s.io/controller-runtime/pkg/client"
	"sigs.k8s.io/controller-runtime/pkg/manager"
	"sigs.k8s.io/controller-runtime/pkg/reconcile"
)

var c client.Client

var expectedRequest = reconcile.Request{NamespacedName: types.NamespacedName{Name: "foo", Namespace: "default"}}

const timeout = time.Second * 5

func TestReconcile(t *testing.T) {
	g := gomega.NewGomegaWithT(t)
	instance := &{{IMPORT_ALIAS}}.{{KIND}}{ObjectMeta: metav1.ObjectMeta{Name: "foo", Namespace: "default"}}

	// Setup the Manager and Controller.  Wrap the Controller Reconcile function so it writes each request to a
	// channel when it is finished.
	mgr, err := manager.New(cfg, manager.Options{})
	g.Expect(err).NotTo(gomega.HaveOccurred())
	c = mgr.GetClient()

	recFn, requests := SetupTestReconcile(newReconciler(mgr))
	g.Expect(add(mgr, recFn)).NotTo(gomega.HaveOccurred())

	stopMgr, mgrStopped := StartTestManager(mgr, g)

	defer func() {
		close(stopMgr)
		mgrStopped.Wait()
	}()

	// Create the {{KIND}} object and expect the Reconcile
	err = c.Create(context.TODO(), instance)
	g.Expect(err).NotTo(gomega.HaveOccurred())
	defer c.Delete(context.TODO(), instance)
	g.Eventually(requests, timeout).Should(gomega.Receive(gomega.Equal(expectedRequest)))
}
"#;

pub(super) const CONTROLLER_SUITE_TEST: &str = r#"{{BOILERPLATE}}package {{CONTROLLERS_PACKAGE}}

import (
	stdlog "log"
	"os"
	"path/filepath"
	"sync"
	"testing"

	"{{REPO}}/pkg/apis"
	"github.com/onsi/gomega"
	"k8s.io/client-go/kubernetes/scheme"
	"k8s.io/client-go/rest"
	"sigs.k8s.io/controller-runtime/pkg/envtest"
	"sigs.k8s.io/controller-runtime/pkg/manager"
	"sigs.k8s.io/controller-runtime/pkg/reconcile"
)

var cfg *rest.Config

func TestMain(m *testing.M) {
	t := &envtest.Environment{
		CRDDirectoryPaths: []string{filepath.Join("..", "..", "..", "config", "crds")},
	}
	apis.AddToScheme(scheme.Scheme)

	var err error
	if cfg, err = t.Start(); err != nil {
		stdlog.Fatal(err)
	}

	code := m.Run()
	t.Stop()
	os.Exit(code)
}

// SetupTestReconcile returns a reconcile.Reconcile implementation that delegates to inner and
// writes the request to requests after Reconcile is finished.
func SetupTestReconcile(inner reconcile.Reconciler) (reconcile.Reconciler, chan reconcile.Request) {
	requests := make(chan reconcile.Request)
	fn := reconcile.Func(func(req reconcile.Request) (reconcile.Result, error) {
		result, err := inner.Reconcile(req)
		requests <- req
		return result, err
	})
	return fn, requests
}

// StartTestManager starts the manager and returns a channel to stop it and a
// wait group that is done once it has stopped.
func StartTestManager(mgr manager.Manager, g *gomega.GomegaWithT) (chan struct{}, *sync.WaitGroup) {
	stop := make(chan struct{})
	wg := &sync.WaitGroup{}
	wg.Add(1)
	go func() {
		defer wg.Done()
		g.Expect(mgr.Start(stop)).NotTo(gomega.HaveOccurred())
	}()
	return stop, wg
}
"#;
